use super::messages;
use crate::api::{ApiError, DashboardApi};
use crate::core::color;
use crate::core::family::Family;
use crate::core::task::{Task, TaskStatus};

/// One chart row: task counts for a status, one cell per family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRow {
    pub status: TaskStatus,
    /// `(family id, count)` in family order.
    pub counts: Vec<(i64, usize)>,
}

impl ChartRow {
    pub fn count(&self, family_id: i64) -> Option<usize> {
        self.counts
            .iter()
            .find(|(id, _)| *id == family_id)
            .map(|(_, n)| *n)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

/// Legend entry and bar colour for one family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    pub family_id: i64,
    pub label: String,
    /// `#rrggbb`
    pub color: String,
}

/// Count tasks per (status, family) for the fixed status order.
pub fn process_data(tasks: &[Task], families: &[Family]) -> Vec<ChartRow> {
    TaskStatus::CHART_ORDER
        .iter()
        .map(|&status| ChartRow {
            status,
            counts: families
                .iter()
                .map(|family| {
                    let n = tasks
                        .iter()
                        .filter(|t| t.family == Some(family.id) && t.status == status)
                        .count();
                    (family.id, n)
                })
                .collect(),
        })
        .collect()
}

pub fn series(families: &[Family]) -> Vec<ChartSeries> {
    families
        .iter()
        .enumerate()
        .map(|(index, family)| ChartSeries {
            family_id: family.id,
            label: family.title.clone(),
            color: color::resolve_hex(family.color_token().as_ref(), index),
        })
        .collect()
}

/// Fetch tasks and families concurrently. The first failure wins and the
/// other result is dropped.
pub async fn fetch_chart_data(api: &dyn DashboardApi) -> Result<(Vec<Task>, Vec<Family>), String> {
    let tasks = async {
        api.list_tasks().await.map_err(|e: ApiError| {
            log::error!("Error fetching tasks: {}", e);
            messages::TASKS_FETCH.to_string()
        })
    };
    let families = async {
        api.list_families().await.map_err(|e: ApiError| {
            log::error!("Error fetching families: {}", e);
            messages::FAMILIES_FETCH.to_string()
        })
    };
    futures::try_join!(tasks, families)
}

/// Bar chart of task statuses per family.
#[derive(Debug, Clone)]
pub struct TaskCompletionChart {
    tasks: Vec<Task>,
    families: Vec<Family>,
    loading: bool,
    error: Option<String>,
}

impl Default for TaskCompletionChart {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            families: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl TaskCompletionChart {
    /// A chart waiting for its first fetch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn families(&self) -> &[Family] {
        &self.families
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    pub fn apply_fetch(&mut self, result: Result<(Vec<Task>, Vec<Family>), String>) {
        self.loading = false;
        match result {
            Ok((tasks, families)) => {
                log::debug!("Chart loaded {} tasks across {} families", tasks.len(), families.len());
                self.tasks = tasks;
                self.families = families;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    pub async fn load(&mut self, api: &dyn DashboardApi) {
        self.begin_loading();
        let result = fetch_chart_data(api).await;
        self.apply_fetch(result);
    }

    pub fn rows(&self) -> Vec<ChartRow> {
        process_data(&self.tasks, &self.families)
    }

    pub fn series(&self) -> Vec<ChartSeries> {
        series(&self.families)
    }

    /// Largest stacked bar, for scaling.
    pub fn max_total(&self) -> usize {
        self.rows().iter().map(ChartRow::total).max().unwrap_or(0)
    }

    /// Display name of a family id, if it is part of the chart.
    pub fn family_title(&self, id: i64) -> Option<&str> {
        self.families
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{Call, MockApi};

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("1", "Dishes", Some(1), TaskStatus::Done),
            Task::new("2", "Laundry", Some(1), TaskStatus::Todo),
            Task::new("3", "Report", Some(2), TaskStatus::Doing),
            Task::new("4", "Taxes", Some(2), TaskStatus::Doing),
            Task::new("5", "Orphan", Some(9), TaskStatus::Done),
            Task::new("6", "Unassigned", None, TaskStatus::Todo),
            Task::new("7", "Archived", Some(1), TaskStatus::Other),
        ]
    }

    #[test]
    fn single_done_task_lands_in_done_row() {
        let families = vec![Family::new(1, "Home")];
        let tasks = vec![Task::new("a", "x", Some(1), TaskStatus::Done)];

        let rows = process_data(&tasks, &families);
        assert_eq!(rows.len(), 4);
        for row in &rows {
            let expected = if row.status == TaskStatus::Done { 1 } else { 0 };
            assert_eq!(row.counts, vec![(1, expected)]);
        }
    }

    #[test]
    fn rows_follow_status_order_and_family_columns() {
        let families = vec![Family::new(2, "Work"), Family::new(1, "Home")];
        let rows = process_data(&sample_tasks(), &families);

        let statuses: Vec<TaskStatus> = rows.iter().map(|r| r.status).collect();
        assert_eq!(statuses, TaskStatus::CHART_ORDER.to_vec());
        for row in &rows {
            let ids: Vec<i64> = row.counts.iter().map(|(id, _)| *id).collect();
            assert_eq!(ids, vec![2, 1]);
        }
        assert_eq!(rows[1].count(2), Some(2));
        assert_eq!(rows[0].count(1), Some(1));
        assert_eq!(rows[3].count(9), None);
    }

    #[test]
    fn cell_sum_counts_only_tasks_of_known_families() {
        let tasks = sample_tasks();
        for families in [
            vec![],
            vec![Family::new(1, "Home")],
            vec![Family::new(1, "Home"), Family::new(2, "Work")],
            vec![Family::new(3, "Empty")],
        ] {
            let rows = process_data(&tasks, &families);
            assert_eq!(rows.len(), 4);
            let sum: usize = rows.iter().map(ChartRow::total).sum();
            let expected = tasks
                .iter()
                .filter(|t| {
                    t.status != TaskStatus::Other
                        && t.family.is_some_and(|id| families.iter().any(|f| f.id == id))
                })
                .count();
            assert_eq!(sum, expected);
        }
    }

    #[test]
    fn series_colors_resolve_tokens() {
        let families = vec![
            Family::new(1, "Home").with_color("bg-purple-500"),
            Family::new(2, "Work").with_color("#123456"),
            Family::new(3, "Club").with_color("bg-lime-100"),
        ];
        let colors: Vec<String> = series(&families).into_iter().map(|s| s.color).collect();
        assert_eq!(colors, vec!["#a855f7", "#123456", color::palette_hex(2)]);
    }

    #[tokio::test]
    async fn load_fetches_both_collections() {
        let api = MockApi::new()
            .with_families(vec![Family::new(1, "Home")])
            .with_tasks(vec![Task::new("a", "x", Some(1), TaskStatus::Done)]);
        let mut chart = TaskCompletionChart::new();
        assert!(chart.is_loading());

        chart.load(&api).await;

        assert!(!chart.is_loading());
        assert_eq!(chart.error(), None);
        assert_eq!(chart.max_total(), 1);
        assert_eq!(chart.family_title(1), Some("Home"));
        let mut calls = api.calls();
        calls.sort_by_key(|c| format!("{:?}", c));
        assert_eq!(calls, vec![Call::ListFamilies, Call::ListTasks]);
    }

    #[tokio::test]
    async fn any_failure_shows_error_and_keeps_previous_data() {
        let api = MockApi::new()
            .with_families(vec![Family::new(1, "Home")])
            .with_tasks(vec![Task::new("a", "x", Some(1), TaskStatus::Todo)]);
        let mut chart = TaskCompletionChart::new();
        chart.load(&api).await;

        api.fail_on(Call::ListTasks);
        chart.load(&api).await;

        assert!(!chart.is_loading());
        assert_eq!(chart.error(), Some(messages::TASKS_FETCH));
        assert_eq!(chart.tasks().len(), 1);
        assert_eq!(chart.families().len(), 1);
    }

    #[tokio::test]
    async fn family_failure_uses_family_message() {
        let api = MockApi::new();
        api.fail_on(Call::ListFamilies);
        let result = fetch_chart_data(&api).await;
        assert_eq!(result, Err(messages::FAMILIES_FETCH.to_string()));
    }
}

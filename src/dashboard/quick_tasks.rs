use std::collections::BTreeSet;

use super::list::EntityList;
use super::messages;
use crate::api::{ApiError, DashboardApi};
use crate::core::quick_task::QuickTask;

/// Result of a sequential multi-delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Ids the server confirmed, in request order.
    pub deleted: Vec<i64>,
    /// The id whose DELETE failed; later ids were not attempted.
    pub failed: Option<(i64, ApiError)>,
}

/// Send one DELETE per id, in order, stopping at the first failure.
///
/// Deletes that already succeeded are not rolled back.
pub async fn delete_quick_tasks(api: &dyn DashboardApi, ids: Vec<i64>) -> DeleteOutcome {
    let mut deleted = Vec::with_capacity(ids.len());
    for id in ids {
        match api.delete_quick_task(id).await {
            Ok(()) => deleted.push(id),
            Err(e) => {
                return DeleteOutcome {
                    deleted,
                    failed: Some((id, e)),
                };
            }
        }
    }
    DeleteOutcome {
        deleted,
        failed: None,
    }
}

/// Server-backed quick tasks, filtered to the daily ones, with a checkbox selection.
#[derive(Debug, Default)]
pub struct QuickTasksWidget {
    tasks: EntityList<QuickTask>,
    selected: BTreeSet<i64>,
}

impl QuickTasksWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[QuickTask] {
        self.tasks.items()
    }

    pub fn error(&self) -> Option<&str> {
        self.tasks.error()
    }

    /// Report an error raised outside the widget, e.g. by the creation dialog.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.tasks.fail(message);
    }

    pub fn apply_load(&mut self, result: Result<Vec<QuickTask>, ApiError>) -> bool {
        let daily = result.map(|tasks| tasks.into_iter().filter(QuickTask::is_daily).collect());
        self.tasks.apply(daily, "quick tasks", messages::QUICK_TASKS_FETCH)
    }

    pub async fn load(&mut self, api: &dyn DashboardApi) -> bool {
        let result = api.list_quick_tasks().await;
        self.apply_load(result)
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn selected_ids(&self) -> Vec<i64> {
        self.selected.iter().copied().collect()
    }

    /// Add `id` to the selection if absent, remove it if present.
    pub fn toggle_selection(&mut self, id: i64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Fold a multi-delete result in. Returns whether a reload should follow.
    ///
    /// Confirmed ids leave the selection. On full success the selection is
    /// cleared; on failure the untried ids stay selected so the user can retry.
    pub fn apply_delete(&mut self, outcome: DeleteOutcome) -> bool {
        for id in &outcome.deleted {
            self.selected.remove(id);
        }
        match outcome.failed {
            None => {
                log::info!("Deleted {} quick tasks", outcome.deleted.len());
                self.selected.clear();
                true
            }
            Some((id, e)) => {
                log::error!(
                    "Error deleting quick task {} after {} deleted: {}",
                    id,
                    outcome.deleted.len(),
                    e
                );
                self.tasks.fail(messages::QUICK_TASKS_DELETE);
                !outcome.deleted.is_empty()
            }
        }
    }

    /// Fold the reload that follows a multi-delete. A delete failure stays
    /// visible even when the reload itself succeeds.
    pub fn apply_reload(&mut self, result: Result<Vec<QuickTask>, ApiError>, delete_failed: bool) -> bool {
        let message = if delete_failed {
            self.error().map(str::to_string)
        } else {
            None
        };
        let replaced = self.apply_load(result);
        if replaced {
            if let Some(message) = message {
                self.tasks.fail(message);
            }
        }
        replaced
    }

    /// Delete every selected task, then reload.
    pub async fn delete_selected(&mut self, api: &dyn DashboardApi) {
        let outcome = delete_quick_tasks(api, self.selected_ids()).await;
        let failed = outcome.failed.is_some();
        if self.apply_delete(outcome) {
            let result = api.list_quick_tasks().await;
            self.apply_reload(result, failed);
        }
    }
}

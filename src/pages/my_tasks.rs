use cosmic::iced::{Alignment, Length};
use cosmic::widget::{column, row, scrollable, text};
use cosmic::Element;

use taskly::core::task::{Task, TaskStatus};
use taskly::dashboard::TaskCompletionChart;

use crate::components::completion_chart::status_label;
use crate::components::error_banner::error_banner;
use crate::fl;
use crate::message::Message;

/// Tasks grouped by status in chart order, each with its family name.
pub fn my_tasks_view<'a>(chart: &TaskCompletionChart) -> Element<'a, Message> {
    let mut content = column()
        .spacing(12)
        .push(text::title3(fl!("nav-my-tasks")));

    if chart.is_loading() {
        return content.push(text::body(fl!("chart-loading"))).into();
    }

    if let Some(err) = chart.error() {
        content = content.push(error_banner(err));
    }

    if chart.tasks().is_empty() {
        return content.push(text::body(fl!("my-tasks-empty"))).into();
    }

    for status in TaskStatus::CHART_ORDER {
        let tasks: Vec<&Task> = chart.tasks().iter().filter(|t| t.status == status).collect();
        if tasks.is_empty() {
            continue;
        }
        content = content.push(text::title4(format!("{} ({})", status_label(status), tasks.len())));
        for task in tasks {
            let family = task
                .family
                .and_then(|id| chart.family_title(id))
                .map(str::to_string)
                .unwrap_or_else(|| fl!("my-tasks-no-team"));
            content = content.push(
                row()
                    .spacing(8)
                    .align_y(Alignment::Center)
                    .push(text::body(task.title.clone()).width(Length::Fill))
                    .push(text::caption(family)),
            );
        }
    }

    scrollable(content.width(Length::Fill)).into()
}

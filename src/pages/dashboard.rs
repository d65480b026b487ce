use cosmic::iced::Length;
use cosmic::widget::{column, row, scrollable, text};
use cosmic::Element;

use taskly::dashboard::{NotesWidget, QuickTasksWidget, TaskCompletionChart};

use crate::components::completion_chart::completion_chart;
use crate::components::notes_card::notes_card;
use crate::components::quick_tasks_card::quick_tasks_card;
use crate::fl;
use crate::message::Message;

pub fn dashboard_view<'a>(
    quick_tasks: &QuickTasksWidget,
    notes: &NotesWidget,
    chart: &TaskCompletionChart,
    last_refreshed: Option<&str>,
) -> Element<'a, Message> {
    let mut content = column()
        .spacing(16)
        .push(text::title3(fl!("nav-dashboard")));

    if let Some(at) = last_refreshed {
        content = content.push(text::caption(fl!("dashboard-refreshed", time = at.to_string())));
    }

    let cards = row()
        .spacing(16)
        .push(quick_tasks_card(quick_tasks))
        .push(notes_card(notes));

    content = content
        .push(cards)
        .push(completion_chart(chart));

    scrollable(content.width(Length::Fill)).into()
}

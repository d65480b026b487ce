use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, checkbox, column, container, icon, row, text};
use cosmic::{Element, theme};

use taskly::dashboard::QuickTasksWidget;

use super::error_banner::error_banner;
use crate::fl;
use crate::message::{DialogKind, Message};

/// Daily quick tasks with checkbox selection and bulk delete.
pub fn quick_tasks_card(widget: &QuickTasksWidget) -> Element<'static, Message> {
    let header = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(text::title4(fl!("quick-tasks-title")).width(Length::Fill))
        .push(
            button::icon(icon::from_name("list-add-symbolic"))
                .on_press(Message::OpenDialog(DialogKind::QuickTask)),
        );

    let mut content = column().spacing(8).push(header);

    if let Some(err) = widget.error() {
        content = content.push(error_banner(err));
    }

    if widget.tasks().is_empty() {
        content = content.push(text::body(fl!("quick-tasks-empty")));
    } else {
        for task in widget.tasks() {
            let id = task.id;
            let title = if task.completed {
                text::body(task.title.clone()).class(theme::Text::Accent)
            } else {
                text::body(task.title.clone())
            };
            content = content.push(
                row()
                    .spacing(8)
                    .align_y(Alignment::Center)
                    .push(checkbox("", widget.is_selected(id)).on_toggle(move |_| Message::ToggleQuickTask(id)))
                    .push(title),
            );
        }
    }

    if widget.has_selection() {
        content = content.push(
            button::destructive(fl!("quick-tasks-delete-selected"))
                .on_press(Message::DeleteSelectedQuickTasks),
        );
    }

    container(content)
        .padding(16)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}

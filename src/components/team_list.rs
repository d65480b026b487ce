use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, icon, row, text};
use cosmic::{Element, theme};

use taskly::dashboard::Sidebar;

use super::error_banner::error_banner;
use super::hex_color;
use crate::fl;
use crate::message::{DialogKind, Message};

/// "Your teams" list: colour dot, title, delete button per family.
pub fn team_list(sidebar: &Sidebar) -> Element<'static, Message> {
    let header = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(text::heading(fl!("teams-title")).width(Length::Fill))
        .push(
            button::icon(icon::from_name("list-add-symbolic"))
                .on_press(Message::OpenDialog(DialogKind::Family)),
        );

    let mut content = column().spacing(6).push(header);

    if let Some(err) = sidebar.error() {
        content = content.push(error_banner(err));
    }

    if sidebar.families().is_empty() {
        content = content.push(text::caption(fl!("teams-empty")));
    }

    for (index, family) in sidebar.families().iter().enumerate() {
        let id = family.id;
        let dot = text::body("\u{25CF}").class(theme::Text::Color(hex_color(&sidebar.dot_color(index))));
        content = content.push(
            row()
                .spacing(8)
                .align_y(Alignment::Center)
                .push(dot)
                .push(text::body(family.title.clone()).width(Length::Fill))
                .push(
                    button::icon(icon::from_name("edit-delete-symbolic"))
                        .on_press(Message::DeleteFamily(id)),
                ),
        );
    }

    content.into()
}

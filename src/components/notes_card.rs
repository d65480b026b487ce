use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, icon, row, text, text_input};
use cosmic::{Element, theme};

use taskly::dashboard::NotesWidget;

use super::error_banner::error_banner;
use crate::fl;
use crate::message::Message;

/// "Add a Note" card: draft input, add button, note list with delete buttons.
pub fn notes_card(notes: &NotesWidget) -> Element<'static, Message> {
    let mut content = column()
        .spacing(12)
        .push(text::title4(fl!("notes-title")));

    if let Some(err) = notes.error() {
        content = content.push(error_banner(err));
    }

    let input = text_input::text_input(fl!("notes-placeholder"), notes.draft().to_string())
        .on_input(Message::NoteDraftChanged)
        .on_submit(|_| Message::NoteSubmit)
        .width(Length::Fill);

    content = content
        .push(input)
        .push(
            button::suggested(fl!("notes-add"))
                .on_press(Message::NoteSubmit)
                .width(Length::Fill),
        )
        .push(text::heading(fl!("notes-yours")));

    for (index, note) in notes.notes().iter().enumerate() {
        let note_row = row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(text::body(note.clone()).width(Length::Fill))
            .push(
                button::icon(icon::from_name("edit-delete-symbolic"))
                    .on_press(Message::DeleteNote(index)),
            );
        content = content.push(note_row);
    }

    container(content)
        .padding(16)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}

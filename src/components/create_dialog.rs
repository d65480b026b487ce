use cosmic::iced::Length;
use cosmic::widget::{button, column, flex_row, text, text_input};
use cosmic::Element;

use taskly::core::color::ColorToken;
use taskly::core::quick_task::QuickTaskType;

use crate::fl;
use crate::message::{DialogKind, Message};

/// Form state behind the creation drawer.
#[derive(Debug, Clone)]
pub struct CreateDialog {
    pub kind: DialogKind,
    pub title: String,
    /// Index into [`dialog_options`].
    pub option: usize,
    pub submitting: bool,
}

impl CreateDialog {
    pub fn new(kind: DialogKind) -> Self {
        Self {
            kind,
            title: String::new(),
            option: 0,
            submitting: false,
        }
    }

    pub fn heading(&self) -> String {
        match self.kind {
            DialogKind::Family => fl!("dialog-family-title"),
            DialogKind::QuickTask => fl!("dialog-quick-task-title"),
        }
    }

    /// The selected quick task type. Only meaningful for quick task dialogs.
    pub fn quick_task_type(&self) -> QuickTaskType {
        QuickTaskType::ALL
            .get(self.option)
            .copied()
            .unwrap_or(QuickTaskType::Day)
    }

    /// The selected colour token, `None` for "no colour".
    pub fn color_token(&self) -> Option<String> {
        let index = self.option.checked_sub(1)?;
        ColorToken::NAMED.get(index).map(|c| c.as_token().to_string())
    }
}

/// Choice labels for the dialog's option row.
pub fn dialog_options(kind: DialogKind) -> Vec<String> {
    match kind {
        DialogKind::QuickTask => QuickTaskType::ALL
            .iter()
            .map(|t| match t {
                QuickTaskType::Day => fl!("quick-task-type-day"),
                QuickTaskType::Month => fl!("quick-task-type-month"),
                QuickTaskType::Other => t.as_keyword().to_string(),
            })
            .collect(),
        DialogKind::Family => std::iter::once(fl!("dialog-no-color"))
            .chain(ColorToken::NAMED.into_iter().map(|c| c.as_token().to_string()))
            .collect(),
    }
}

pub fn create_dialog(dialog: &CreateDialog) -> Element<'static, Message> {
    let mut content = column().spacing(16);

    content = content.push(text::title4(fl!("dialog-name")));
    content = content.push(
        text_input::text_input(fl!("dialog-name-placeholder"), dialog.title.clone())
            .on_input(Message::DialogTitleChanged)
            .on_submit(|_| Message::DialogSubmit)
            .width(Length::Fill),
    );

    let option_heading = match dialog.kind {
        DialogKind::Family => fl!("dialog-color"),
        DialogKind::QuickTask => fl!("dialog-type"),
    };
    content = content.push(text::title4(option_heading));

    let options: Vec<Element<'static, Message>> = dialog_options(dialog.kind)
        .into_iter()
        .enumerate()
        .map(|(index, label)| {
            let btn = if index == dialog.option {
                button::suggested(label)
            } else {
                button::standard(label)
            };
            btn.on_press(Message::DialogOptionSelected(index)).into()
        })
        .collect();
    content = content.push(flex_row(options).row_spacing(4).column_spacing(4));

    let can_submit = !dialog.submitting && !dialog.title.trim().is_empty();
    let submit = button::suggested(fl!("dialog-create"))
        .on_press_maybe(can_submit.then_some(Message::DialogSubmit));
    content = content
        .push(submit)
        .push(button::standard(fl!("dialog-cancel")).on_press(Message::CloseDialog));

    content.into()
}

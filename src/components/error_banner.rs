use cosmic::iced::Color;
use cosmic::widget::text;
use cosmic::{Element, theme};

use crate::message::Message;

const ERROR_RED: Color = Color::from_rgb(0.937, 0.267, 0.267);

/// Inline red error line shown inside a widget card.
pub fn error_banner(message: &str) -> Element<'static, Message> {
    text::body(message.to_string())
        .class(theme::Text::Color(ERROR_RED))
        .into()
}

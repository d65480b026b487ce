use cosmic::widget::{column, text};
use cosmic::Element;

use crate::fl;
use crate::message::Message;

pub fn calendar_view<'a>() -> Element<'a, Message> {
    column()
        .spacing(12)
        .push(text::title3(fl!("nav-calendar")))
        .push(text::body(fl!("calendar-placeholder")))
        .into()
}

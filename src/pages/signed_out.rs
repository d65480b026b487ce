use cosmic::iced::Length;
use cosmic::widget::{button, column, container, text, text_input};
use cosmic::Element;

use crate::fl;
use crate::message::Message;

/// Landing screen shown when no auth token is stored.
pub fn signed_out_view<'a>(token_input: &str) -> Element<'a, Message> {
    let input = text_input::secure_input(
        fl!("signed-out-token-placeholder"),
        token_input.to_string(),
        None::<Message>,
        true,
    )
    .on_input(Message::TokenInputChanged)
    .on_submit(|_| Message::SignIn)
    .width(Length::Fill);

    let sign_in = button::suggested(fl!("signed-out-sign-in"))
        .on_press_maybe((!token_input.trim().is_empty()).then_some(Message::SignIn));

    let content = column()
        .spacing(16)
        .max_width(420)
        .push(text::title3(fl!("signed-out-title")))
        .push(text::body(fl!("signed-out-body")))
        .push(input)
        .push(sign_in);

    container(content)
        .padding(32)
        .center_x(Length::Fill)
        .into()
}

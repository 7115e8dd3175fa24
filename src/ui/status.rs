use iced::widget::{container, text};
use iced::{Element, Fill};

use crate::app::Message;
use crate::ui::theme;

/// Banner with the last committed selection
pub fn selected(id: i64) -> Element<'static, Message> {
    container(text(format!("Selected ID: {id}")).size(14).style(theme::selected_text))
        .padding([6, 12])
        .width(Fill)
        .style(theme::selected_banner)
        .into()
}

/// Status line (prompt, no-results or error text)
pub fn message(message: &str) -> Element<'_, Message> {
    text(message).size(14).style(theme::message_text).into()
}

/// Illustration shown under the "no results" message
pub fn empty_state() -> Element<'static, Message> {
    container(text("∅").size(64).style(theme::message_text))
        .center_x(Fill)
        .padding(20)
        .into()
}

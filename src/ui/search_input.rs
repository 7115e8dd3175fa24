use iced::widget::{button, row, text, text_input};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::ui::theme;

/// The search input ID for focus management
pub const SEARCH_INPUT_ID: &str = "birdsearch-input";

/// Build the search bar: input, loading indicator and clear button
pub fn view<'a>(query: &'a str, placeholder: &'a str, busy: bool) -> Element<'a, Message> {
    let input = text_input(placeholder, query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::Submit)
        .id(SEARCH_INPUT_ID)
        .padding(12)
        .size(18)
        .width(Fill)
        .style(theme::search_input);

    let indicator = text(if busy { "Searching…" } else { "" })
        .size(12)
        .style(theme::indicator);

    let mut bar = row![input, indicator]
        .spacing(8)
        .align_y(Alignment::Center);

    if !query.is_empty() {
        bar = bar.push(
            button(text("Clear").size(12))
                .on_press(Message::Clear)
                .padding([6, 10])
                .style(theme::clear_button),
        );
    }

    bar.into()
}

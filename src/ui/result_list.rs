use iced::widget::{container, mouse_area, text, Column, Row};
use iced::{font, Element, Fill, Font, Padding};

use birdsearch::search::{Emphasizer, Search, Segment};

use crate::app::Message;
use crate::ui::theme;

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Build the suggestion dropdown.
/// Only the rows the controller has scrolled into view are rendered.
pub fn view(search: &Search) -> Element<'_, Message> {
    let state = search.state();
    let emphasizer = Emphasizer::new(search.query());
    let range = search.visible_range();

    let mut rows = Column::new().spacing(2);
    for (i, item) in state
        .suggestions
        .iter()
        .enumerate()
        .skip(range.start)
        .take(range.len())
    {
        let is_active = state.active_index == Some(i);
        let style = if is_active {
            theme::result_row_selected as fn(&iced::Theme) -> container::Style
        } else {
            theme::result_row
        };

        let label = emphasizer
            .split(&item.title)
            .into_iter()
            .filter(|segment| !segment.text.is_empty())
            .fold(Row::new(), |label, segment| label.push(segment_text(segment)));

        let row = container(label)
            .padding(Padding::from([8, 12]))
            .width(Fill)
            .style(style);

        rows = rows.push(
            mouse_area(row)
                .on_press(Message::Select(item.id))
                .on_enter(Message::Hovered(i)),
        );
    }

    mouse_area(container(rows).padding(4).width(Fill).style(theme::dropdown))
        .on_exit(Message::PointerLeft)
        .into()
}

fn segment_text(segment: Segment<'_>) -> Element<'_, Message> {
    if segment.matched {
        text(segment.text)
            .size(16)
            .font(BOLD)
            .style(theme::result_match)
            .into()
    } else {
        text(segment.text).size(16).style(theme::result_name).into()
    }
}

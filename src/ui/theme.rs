use iced::widget::{button, container, text, text_input};
use iced::{Border, Color, Shadow, Theme};

/// Window background
pub const BACKGROUND: Color = Color {
    r: 0.12,
    g: 0.12,
    b: 0.15,
    a: 1.0,
};

/// Slightly lighter surface color for the input and dropdown
const SURFACE: Color = Color {
    r: 0.18,
    g: 0.18,
    b: 0.22,
    a: 1.0,
};

/// Accent color for the active row and matched text
const ACCENT: Color = Color {
    r: 0.35,
    g: 0.55,
    b: 0.85,
    a: 1.0,
};

pub const TEXT_PRIMARY: Color = Color {
    r: 0.9,
    g: 0.9,
    b: 0.92,
    a: 1.0,
};

pub const TEXT_SECONDARY: Color = Color {
    r: 0.55,
    g: 0.55,
    b: 0.6,
    a: 1.0,
};

const fn accent(alpha: f32) -> Color {
    Color {
        r: ACCENT.r,
        g: ACCENT.g,
        b: ACCENT.b,
        a: alpha,
    }
}

/// Style for the container wrapping the whole widget
pub fn main_container(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(BACKGROUND.into()),
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for the search text input
pub fn search_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let _ = theme;
    let focused = matches!(status, text_input::Status::Focused { .. });
    text_input::Style {
        background: SURFACE.into(),
        border: Border {
            color: if focused { ACCENT } else { Color::TRANSPARENT },
            width: if focused { 2.0 } else { 0.0 },
            radius: 8.0.into(),
        },
        icon: TEXT_SECONDARY,
        placeholder: TEXT_SECONDARY,
        value: TEXT_PRIMARY,
        selection: accent(0.3),
    }
}

pub fn clear_button(theme: &Theme, status: button::Status) -> button::Style {
    let _ = theme;
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
    button::Style {
        background: Some(if hovered { accent(0.3) } else { SURFACE }.into()),
        text_color: TEXT_SECONDARY,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 6.0.into(),
        },
        ..button::Style::default()
    }
}

/// Style for the dropdown holding the suggestion rows
pub fn dropdown(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(SURFACE.into()),
        border: Border {
            color: Color {
                r: 0.3,
                g: 0.3,
                b: 0.35,
                a: 0.5,
            },
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: Color::BLACK,
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for a suggestion row (not active)
pub fn result_row(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: None,
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for the active suggestion row
pub fn result_row_selected(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(accent(0.2).into()),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 6.0.into(),
        },
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

pub fn result_name(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_PRIMARY),
    }
}

/// Part of a suggestion that matches the query
pub fn result_match(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(Color::WHITE),
    }
}

pub fn indicator(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_SECONDARY),
    }
}

pub fn message_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_SECONDARY),
    }
}

pub fn selected_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_PRIMARY),
    }
}

pub fn selected_banner(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(accent(0.15).into()),
        border: Border {
            color: accent(0.4),
            width: 1.0,
            radius: 6.0.into(),
        },
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

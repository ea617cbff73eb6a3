use crate::domain::Treatment;
use ratatui::style::{Color, Modifier, Style};

/// Window background ("dark green")
pub const DARK_GREEN: Color = Color::Rgb(0, 100, 0);

/// Window background style
pub fn window_style() -> Style {
    Style::default().bg(DARK_GREEN).fg(Color::White)
}

/// Text field style for a row's treatment
pub fn text_field_style(treatment: Treatment) -> Style {
    match treatment {
        Treatment::Default => Style::default().bg(Color::Black).fg(Color::White),
        Treatment::Completed => Style::default().bg(Color::Green).fg(Color::White),
    }
}

/// Read-only date label
pub fn date_style() -> Style {
    Style::default().bg(DARK_GREEN).fg(Color::White)
}

/// Checkbox glyph style
pub fn checkbox_style() -> Style {
    Style::default()
        .bg(DARK_GREEN)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Marker for the selected row
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .bg(DARK_GREEN)
        .add_modifier(Modifier::BOLD)
}

/// Cursor cell inside the focused text field
pub fn cursor_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::White)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Highlighted menu entry
pub fn menu_selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightGreen)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Status line style
pub fn status_style() -> Style {
    Style::default().fg(Color::LightGreen)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

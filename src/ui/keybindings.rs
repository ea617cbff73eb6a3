use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" F10/m menu   "),
        Span::raw("↑/↓ select   "),
        Span::raw("space check   "),
        Span::raw("enter edit   "),
        Span::raw("a add   "),
        Span::raw("x delete   "),
        Span::raw("c mark   "),
        Span::raw("u unmark   "),
        Span::raw("e modify   "),
        Span::raw("s save   "),
        Span::raw("l load   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}

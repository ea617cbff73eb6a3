use crate::app::Application;
use crate::domain::{MenuCommand, UiMode};
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, menu_selected_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, Clear, Paragraph, Wrap,
    },
    Frame,
};

/// Render the persistence error dialog
pub fn render_error_modal(f: &mut Frame, app: &Application, area: Rect) {
    if let Some(modal) = &app.modal {
        let modal_area = create_modal_area(area, 9);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let lines = vec![
            Line::raw(""),
            Line::styled(format!("  {}", modal.message), error_style()),
            Line::raw(""),
            Line::raw("  The task list was left unchanged."),
            Line::raw(""),
            Line::from(vec![
                Span::styled("  [Enter]", modal_title_style()),
                Span::raw(" OK"),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(format!(" {} ", modal.title), modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

/// Render the "Opciones" menu
pub fn render_menu(f: &mut Frame, app: &Application, area: Rect) {
    if app.ui_mode == UiMode::Menu {
        let commands = MenuCommand::all();
        let modal_area = create_modal_area(area, commands.len() as u16 + 4);

        f.render_widget(Clear, modal_area);

        let mut lines = vec![Line::raw("")];
        for (idx, command) in commands.iter().enumerate() {
            let text = format!("  [{}] {}", command.key(), command.label());
            if idx == app.menu_index {
                lines.push(Line::styled(text, menu_selected_style()));
            } else {
                lines.push(Line::raw(text));
            }
        }
        lines.push(Line::raw(""));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Opciones ", modal_title_style()))
                .title(Title::from(" Enter run · Esc close ").position(Position::Bottom))
                .style(modal_bg_style()),
        );

        f.render_widget(paragraph, modal_area);
    }
}

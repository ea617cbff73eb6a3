pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod rows;
pub mod styles;

use crate::app::Application;
use crate::domain::UiMode;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::{render_error_modal, render_menu};
use ratatui::{text::Line, widgets::Paragraph, Frame};
use styles::status_style;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &Application) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area);
    render_list_pane(f, app, layout.list_area);

    let status = Paragraph::new(Line::raw(format!(" {}", app.status_message))).style(status_style());
    f.render_widget(status, layout.status_area);

    // Error dialog takes precedence over the menu
    if app.ui_mode == UiMode::Error {
        render_error_modal(f, app, size);
        return;
    }

    render_menu(f, app, size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuCommand;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::tempdir;

    /// Render the full UI into an in-memory buffer and return plain text
    fn render_to_string(app: &Application, w: u16, h: u16) -> String {
        let backend = TestBackend::new(w, h);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buf = terminal.backend().buffer().clone();
        buf.content
            .chunks(buf.area.width as usize)
            .map(|row| {
                let s: String = row.iter().map(|cell| cell.symbol()).collect();
                s.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_rows() {
        let dir = tempdir().unwrap();
        let mut app = Application::new(dir.path().join("tareas.json"));
        app.store.add("Buy milk", "05/04/2025", false);
        app.store.add("Pay rent", "01/04/2025", true);
        app.sync_rows();

        let screen = render_to_string(&app, 60, 10);
        assert!(screen.contains("Gestor de Tareas"));
        assert!(screen.contains("> Buy milk"));
        assert!(screen.contains("05/04/2025 [ ]"));
        assert!(screen.contains("Pay rent"));
        assert!(screen.contains("01/04/2025 [x]"));
    }

    #[test]
    fn test_render_empty_list() {
        let dir = tempdir().unwrap();
        let app = Application::new(dir.path().join("tareas.json"));

        let screen = render_to_string(&app, 60, 10);
        assert!(screen.contains("No tasks yet"));
    }

    #[test]
    fn test_render_menu() {
        let dir = tempdir().unwrap();
        let mut app = Application::new(dir.path().join("tareas.json"));
        app.open_menu();

        let screen = render_to_string(&app, 80, 24);
        assert!(screen.contains("Opciones"));
        for command in MenuCommand::all() {
            assert!(screen.contains(command.label()), "missing {}", command.label());
        }
    }

    #[test]
    fn test_render_error_modal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tareas.json");
        std::fs::write(&path, "not json").unwrap();
        let app = Application::start(path);

        let screen = render_to_string(&app, 100, 30);
        assert!(screen.contains("Load failed"));
        assert!(screen.contains("invalid task list"));
    }
}

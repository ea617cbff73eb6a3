use crate::app::Application;
use crate::domain::{MenuCommand, UiMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns `true` when the app should quit.
pub fn handle_key(app: &mut Application, key: KeyEvent) -> bool {
    // Ctrl-C always quits, whatever is focused
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Menu => handle_menu_mode(app, key),
        UiMode::EditingText => handle_editing_mode(app, key),
        UiMode::Error => handle_error_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut Application, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        KeyCode::F(10) | KeyCode::Char('m') | KeyCode::Char('M') => app.open_menu(),

        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),

        // Checkbox
        KeyCode::Char(' ') => app.toggle_selected(),

        // Focus the text field
        KeyCode::Enter | KeyCode::Char('i') => app.start_editing(),

        // Menu accelerators
        KeyCode::Char(c) => {
            if let Some(command) = MenuCommand::from_key(c) {
                app.run_command(command);
            }
        }

        _ => {}
    }
    false
}

/// Handle keys while the "Opciones" menu is open
fn handle_menu_mode(app: &mut Application, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up => app.menu_up(),
        KeyCode::Down => app.menu_down(),
        KeyCode::Enter => app.menu_select(),
        KeyCode::Esc | KeyCode::F(10) => app.close_menu(),
        KeyCode::Char(c) => {
            if let Some(command) = MenuCommand::from_key(c) {
                app.run_command(command);
            }
        }
        _ => {}
    }
    false
}

/// Handle keys while a row's text field has focus
fn handle_editing_mode(app: &mut Application, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.stop_editing(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        KeyCode::Home => app.cursor_home(),
        KeyCode::End => app.cursor_end(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete_char(),
        KeyCode::Char(c) => app.insert_char(c),
        _ => {}
    }
    false
}

/// Handle keys while the error dialog is shown
fn handle_error_mode(app: &mut Application, key: KeyEvent) -> bool {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_modal();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn press(app: &mut Application, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn create_test_app() -> (TempDir, Application) {
        let dir = tempdir().unwrap();
        let app = Application::start(dir.path().join("tareas.json"));
        (dir, app)
    }

    #[test]
    fn test_quit_keys() {
        let (_dir, mut app) = create_test_app();
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_typing_into_new_task() {
        let (_dir, mut app) = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.ui_mode, UiMode::EditingText);

        // 'q' is text while editing, not quit
        for c in "quit".chars() {
            assert!(!press(&mut app, KeyCode::Char(c)));
        }
        press(&mut app, KeyCode::Enter);

        let handle = app.selected_handle().unwrap();
        assert_eq!(app.store.get(handle).unwrap().text, "quit");
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_checkbox_and_delete() {
        let (_dir, mut app) = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.store.iter().all(|(_, task)| task.done));

        press(&mut app, KeyCode::Char('x'));
        assert!(app.store.is_empty());
        assert!(app.rows.is_empty());
    }

    #[test]
    fn test_menu_flow() {
        let (_dir, mut app) = create_test_app();
        press(&mut app, KeyCode::F(10));
        assert_eq!(app.ui_mode, UiMode::Menu);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.ui_mode, UiMode::Normal);

        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.ui_mode, UiMode::EditingText);
    }

    #[test]
    fn test_error_dialog_dismissed() {
        let dir = tempdir().unwrap();
        let mut app = Application::new(dir.path().join("missing").join("tareas.json"));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.ui_mode, UiMode::Error);

        // Other keys are swallowed while the dialog is up
        press(&mut app, KeyCode::Char('a'));
        assert!(app.store.is_empty());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.modal.is_none());
    }
}

use crate::domain::{MenuCommand, TaskHandle, TaskStore, Treatment, UiMode};
use crate::persistence::{load_tasks, save_tasks, PersistenceError};
use crate::ui::rows::RowList;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Error dialog contents
#[derive(Debug, Clone)]
pub struct ModalState {
    pub title: String,
    pub message: String,
}

/// Main application state.
///
/// Owns the task store and the row list that mirrors it; every command
/// mutates the store first and then replays the store's notifications into
/// the rows.
pub struct Application {
    pub store: TaskStore,
    pub rows: RowList,
    pub list_path: PathBuf,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub menu_index: usize,
    pub cursor: usize, // Char position in the text being edited
    pub modal: Option<ModalState>,
    pub status_message: String,
}

impl Application {
    /// Empty application bound to a list file; nothing is loaded yet
    pub fn new(list_path: PathBuf) -> Self {
        Self {
            store: TaskStore::new(),
            rows: RowList::new(),
            list_path,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            menu_index: 0,
            cursor: 0,
            modal: None,
            status_message: String::new(),
        }
    }

    /// Build the application and run the initial load
    pub fn start(list_path: PathBuf) -> Self {
        let mut app = Self::new(list_path);
        app.load_list();
        app
    }

    /// Replay pending store notifications into the row list
    pub(crate) fn sync_rows(&mut self) {
        let events = self.store.take_events();
        self.rows.apply_all(&events);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.rows.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.rows.len() {
            self.selected_index = self.rows.len() - 1;
        }
    }

    /// Handle of the selected row, if any
    pub fn selected_handle(&self) -> Option<TaskHandle> {
        self.rows.get(self.selected_index).map(|row| row.handle)
    }

    fn done_handles(&self) -> Vec<TaskHandle> {
        self.store
            .iter()
            .filter(|(_, task)| task.done)
            .map(|(handle, _)| handle)
            .collect()
    }

    /// Dispatch a menu command
    pub fn run_command(&mut self, command: MenuCommand) {
        debug!(?command, "running menu command");
        self.ui_mode = UiMode::Normal;
        match command {
            MenuCommand::AddTask => self.add_task(),
            MenuCommand::DeleteChecked => self.delete_checked(),
            MenuCommand::MarkCompleted => self.mark_completed(),
            MenuCommand::UnmarkCompleted => self.unmark_completed(),
            MenuCommand::ModifyTask => self.modify_task(),
            MenuCommand::SaveList => self.save_list(),
            MenuCommand::LoadList => self.load_list(),
        }
    }

    /// Append an empty task stamped today and focus its text field
    pub fn add_task(&mut self) {
        let handle = self.store.add("", "", false);
        self.sync_rows();

        if let Some(index) = self.store.position(handle) {
            self.selected_index = index;
        }
        self.start_editing();
    }

    /// Delete every checked task
    pub fn delete_checked(&mut self) {
        let removed = self.store.remove_if(|task| task.done);
        self.sync_rows();

        if !removed.is_empty() {
            self.status_message = format!("Deleted {} task(s)", removed.len());
        }
    }

    /// Give checked rows the completed look; `done` stays as it is
    pub fn mark_completed(&mut self) {
        for handle in self.done_handles() {
            if let Some(row) = self.rows.find_mut(handle) {
                row.treatment = Treatment::Completed;
            }
        }
    }

    /// Uncheck checked tasks and restore their default look
    pub fn unmark_completed(&mut self) {
        let touched = self
            .store
            .for_each_matching(|task| task.done, |task| task.done = false);
        self.sync_rows();

        for handle in touched {
            if let Some(row) = self.rows.find_mut(handle) {
                row.treatment = Treatment::Default;
            }
        }
    }

    /// Re-enable text editing on checked rows
    pub fn modify_task(&mut self) {
        for handle in self.done_handles() {
            if let Some(row) = self.rows.find_mut(handle) {
                row.editable = true;
            }
        }
    }

    /// Write the full list to disk. Failures open the error dialog.
    pub fn save_list(&mut self) {
        let tasks = self.store.snapshot();
        match save_tasks(&self.list_path, &tasks) {
            Ok(()) => {
                info!(count = tasks.len(), path = %self.list_path.display(), "saved task list");
                self.status_message = format!("Saved {} task(s)", tasks.len());
            }
            Err(err) => self.show_error("Save failed", &err),
        }
    }

    /// Replace the list with the file contents. On failure the current list
    /// is kept and the error dialog opens.
    pub fn load_list(&mut self) {
        let tasks = match load_tasks(&self.list_path) {
            Ok(tasks) => tasks,
            Err(err) => {
                self.show_error("Load failed", &err);
                return;
            }
        };

        let count = tasks.len();
        let done: Vec<bool> = tasks.iter().map(|task| task.done).collect();
        let handles = self.store.replace_all(tasks);
        self.sync_rows();

        for (handle, done) in handles.into_iter().zip(done) {
            if done {
                if let Some(row) = self.rows.find_mut(handle) {
                    row.treatment = Treatment::Completed;
                }
            }
        }

        self.selected_index = 0;
        self.ui_mode = UiMode::Normal;
        info!(count, path = %self.list_path.display(), "loaded task list");
        self.status_message = format!("Loaded {} task(s)", count);
    }

    fn show_error(&mut self, title: &str, err: &PersistenceError) {
        warn!(error = %err, "{}", title);
        self.modal = Some(ModalState {
            title: title.to_string(),
            message: err.to_string(),
        });
        self.ui_mode = UiMode::Error;
    }

    /// Close the error dialog
    pub fn dismiss_modal(&mut self) {
        self.modal = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Flip the selected row's checkbox
    pub fn toggle_selected(&mut self) {
        if let Some(handle) = self.selected_handle() {
            self.store.toggle_done(handle);
            self.sync_rows();
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.rows.len() {
            self.selected_index += 1;
        }
    }

    /// Open the "Opciones" menu
    pub fn open_menu(&mut self) {
        self.menu_index = 0;
        self.ui_mode = UiMode::Menu;
    }

    pub fn close_menu(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn menu_up(&mut self) {
        if self.menu_index > 0 {
            self.menu_index -= 1;
        }
    }

    pub fn menu_down(&mut self) {
        if self.menu_index + 1 < MenuCommand::all().len() {
            self.menu_index += 1;
        }
    }

    /// Run the highlighted menu entry
    pub fn menu_select(&mut self) {
        if let Some(command) = MenuCommand::all().get(self.menu_index).copied() {
            self.run_command(command);
        }
    }

    /// Focus the selected row's text field when it accepts input
    pub fn start_editing(&mut self) {
        let Some(row) = self.rows.get(self.selected_index) else {
            return;
        };
        if !row.editable {
            return;
        }

        self.cursor = self
            .store
            .get(row.handle)
            .map(|task| task.text.chars().count())
            .unwrap_or(0);
        self.ui_mode = UiMode::EditingText;
    }

    pub fn stop_editing(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Text of the selected row, for in-place editing
    fn selected_text(&self) -> Option<(TaskHandle, String)> {
        let handle = self.selected_handle()?;
        let text = self.store.get(handle)?.text.clone();
        Some((handle, text))
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some((handle, mut text)) = self.selected_text() {
            let at = byte_offset(&text, self.cursor);
            text.insert(at, c);
            self.cursor += 1;
            self.store.set_text(handle, text);
            self.sync_rows();
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        if let Some((handle, mut text)) = self.selected_text() {
            let at = byte_offset(&text, self.cursor - 1);
            text.remove(at);
            self.cursor -= 1;
            self.store.set_text(handle, text);
            self.sync_rows();
        }
    }

    pub fn delete_char(&mut self) {
        if let Some((handle, mut text)) = self.selected_text() {
            if self.cursor < text.chars().count() {
                let at = byte_offset(&text, self.cursor);
                text.remove(at);
                self.store.set_text(handle, text);
                self.sync_rows();
            }
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let len = self
            .selected_text()
            .map(|(_, text)| text.chars().count())
            .unwrap_or(0);
        if self.cursor < len {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self
            .selected_text()
            .map(|(_, text)| text.chars().count())
            .unwrap_or(0);
    }
}

/// Byte index of the `chars`-th character (or the end of the string)
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

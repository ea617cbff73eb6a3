pub mod files;
pub mod tasks_file;

pub use files::{resolve_list_file, LIST_FILE_NAME};
pub use tasks_file::{load_tasks, save_tasks, PersistenceError};

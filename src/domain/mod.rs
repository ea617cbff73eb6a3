pub mod enums;
pub mod store;
pub mod task;

pub use enums::{MenuCommand, Treatment, UiMode};
pub use store::{StoreEvent, TaskStore};
pub use task::{Task, TaskHandle};

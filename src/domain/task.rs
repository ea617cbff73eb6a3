use chrono::Local;
use uuid::Uuid;

/// Date format used for creation stamps (e.g. "05/04/2025")
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Today's local date formatted as a creation stamp
pub fn today_stamp() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// Stable reference to a task inside the store.
///
/// Handles are issued by the store and never reused, so the presentation
/// layer can bind a row to a task without holding on to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(Uuid);

impl TaskHandle {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// User-editable content
    pub text: String,
    /// Creation stamp in DD/MM/YYYY, fixed once assigned
    pub created_at: String,
    /// Checkbox state
    pub done: bool,
}

impl Task {
    /// Create a task, stamping today's date when `created_at` is empty
    pub fn new(text: impl Into<String>, created_at: impl Into<String>, done: bool) -> Self {
        let created_at = created_at.into();
        let created_at = if created_at.is_empty() {
            today_stamp()
        } else {
            created_at
        };

        Self {
            text: text.into(),
            created_at,
            done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_stamps_today() {
        let task = Task::new("Buy milk", "", false);
        assert_eq!(task.created_at, today_stamp());
        assert_eq!(task.text, "Buy milk");
        assert!(!task.done);
    }

    #[test]
    fn test_new_task_keeps_given_date() {
        let task = Task::new("Pay rent", "01/04/2025", true);
        assert_eq!(task.created_at, "01/04/2025");
        assert!(task.done);
    }

    #[test]
    fn test_today_stamp_shape() {
        let stamp = today_stamp();
        assert_eq!(stamp.len(), 10);
        assert_eq!(stamp.chars().nth(2), Some('/'));
        assert_eq!(stamp.chars().nth(5), Some('/'));
        assert!(chrono::NaiveDate::parse_from_str(&stamp, DATE_FORMAT).is_ok());
    }

    #[test]
    fn test_empty_task() {
        let task = Task::new("", "", false);
        assert!(task.text.is_empty());
        assert!(!task.created_at.is_empty());
        assert!(!task.done);
    }
}

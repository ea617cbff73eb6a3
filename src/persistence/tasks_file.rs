use crate::domain::Task;
use crate::persistence::files::{atomic_write, read_file};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures reading or writing the task list file
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid task list in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl PersistenceError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn parse(path: &Path, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// On-disk shape of one task. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TaskRecord {
    texto: String,
    fecha: String,
    estado: bool,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            texto: task.text.clone(),
            fecha: task.created_at.clone(),
            estado: task.done,
        }
    }
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Task::new(record.texto, record.fecha, record.estado)
    }
}

/// Serialize tasks as a JSON array pretty-printed with 4-space indentation
pub fn serialize_tasks(tasks: &[Task]) -> serde_json::Result<String> {
    let records: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from).collect();

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parse a JSON array of task records (pretty or compact)
pub fn parse_tasks(content: &str) -> serde_json::Result<Vec<Task>> {
    let records: Vec<TaskRecord> = serde_json::from_str(content)?;
    Ok(records.into_iter().map(Task::from).collect())
}

/// Write the full list to `path`, replacing whatever was there
pub fn save_tasks<P: AsRef<Path>>(path: P, tasks: &[Task]) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    let json = serialize_tasks(tasks).map_err(|e| PersistenceError::parse(path, e))?;
    atomic_write(path, &json).map_err(|e| PersistenceError::io(path, e))
}

/// Load the list from `path`. A missing file is an empty list.
pub fn load_tasks<P: AsRef<Path>>(path: P) -> Result<Vec<Task>, PersistenceError> {
    let path = path.as_ref();
    match read_file(path).map_err(|e| PersistenceError::io(path, e))? {
        Some(content) => parse_tasks(&content).map_err(|e| PersistenceError::parse(path, e)),
        None => Ok(Vec::new()),
    }
}

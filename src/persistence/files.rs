use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default name of the task list file
pub const LIST_FILE_NAME: &str = "tareas.json";

/// Resolve the task list path against the current directory.
/// Absolute paths are returned unchanged.
pub fn resolve_list_file<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(env::current_dir()?.join(path))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Create temp file in the same directory so the rename stays on one filesystem
    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.as_file().sync_all()?;

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Read file content, `None` if the file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_write_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        atomic_write(&test_file, "Hello, world!").unwrap();
        assert_eq!(read_file(&test_file).unwrap().as_deref(), Some("Hello, world!"));
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        atomic_write(&test_file, "a much longer first version").unwrap();
        atomic_write(&test_file, "short").unwrap();
        assert_eq!(read_file(&test_file).unwrap().as_deref(), Some("short"));
    }

    #[test]
    fn test_read_nonexistent_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("nonexistent.txt");

        assert_eq!(read_file(&test_file).unwrap(), None);
    }

    #[test]
    fn test_atomic_write_into_missing_dir_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("missing").join("test.txt");

        assert!(atomic_write(&test_file, "x").is_err());
    }

    #[test]
    fn test_resolve_list_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let absolute = temp_dir.path().join(LIST_FILE_NAME);
        assert_eq!(resolve_list_file(&absolute).unwrap(), absolute);

        let relative = resolve_list_file(LIST_FILE_NAME).unwrap();
        assert!(relative.is_absolute());
        assert!(relative.ends_with(LIST_FILE_NAME));
    }
}

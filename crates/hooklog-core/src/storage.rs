//! Storage backends for log records.

use crate::error::HookError;
use crate::event::LogRecord;
use async_trait::async_trait;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Trait for record storage backends.
#[async_trait]
pub trait RecordStorage: Send + Sync {
    /// Append one record.
    async fn append(&self, record: &LogRecord) -> Result<(), HookError>;
}

/// Appends records to a newline-delimited JSON file.
///
/// The file is opened in append mode for every record and closed again before
/// returning. No locking is taken against concurrent writers; line atomicity
/// is whatever the host filesystem provides for appends of that size.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a file storage, making sure the log directory exists. A
    /// directory that is already present is treated as success.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, HookError> {
        let path = path.into();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        Ok(Self { path })
    }

    /// The file records are appended to.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl RecordStorage for FileStorage {
    async fn append(&self, record: &LogRecord) -> Result<(), HookError> {
        let line = record.to_json_line()?;
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}

/// Prints records to stdout.
pub struct ConsoleStorage;

#[async_trait]
impl RecordStorage for ConsoleStorage {
    async fn append(&self, record: &LogRecord) -> Result<(), HookError> {
        println!("{}", record.to_json_line()?);
        Ok(())
    }
}

/// Dual output: file + console.
pub struct DualStorage {
    file: FileStorage,
}

impl DualStorage {
    /// Create a dual storage on top of an existing file storage.
    pub fn new(file: FileStorage) -> Self {
        Self { file }
    }
}

#[async_trait]
impl RecordStorage for DualStorage {
    async fn append(&self, record: &LogRecord) -> Result<(), HookError> {
        self.file.append(record).await?;
        ConsoleStorage.append(record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ToolUseEvent;
    use serde_json::Value;

    fn sample_record(raw: &str) -> LogRecord {
        LogRecord::from_event(&ToolUseEvent::from_json(raw).unwrap())
    }

    #[tokio::test]
    async fn test_file_storage_appends_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tool-usage.jsonl");
        let storage = FileStorage::new(&path).unwrap();

        storage
            .append(&sample_record(r#"{"tool_name": "Bash"}"#))
            .await
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1);

        let parsed: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["tool_name"], "Bash");
    }

    #[tokio::test]
    async fn test_file_storage_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("usage.jsonl");
        let storage = FileStorage::new(&path).unwrap();

        storage.append(&sample_record("{}")).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_file_storage_appends_in_order_without_truncating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tool-usage.jsonl");
        let storage = FileStorage::new(&path).unwrap();

        storage
            .append(&sample_record(r#"{"tool_name": "first"}"#))
            .await
            .unwrap();
        storage
            .append(&sample_record(r#"{"tool_name": "second"}"#))
            .await
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Value = serde_json::from_str(lines[0]).unwrap();
        let second: Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first["tool_name"], "first");
        assert_eq!(second["tool_name"], "second");
    }

    #[tokio::test]
    async fn test_console_storage() {
        // Should not error
        ConsoleStorage.append(&sample_record("{}")).await.unwrap();
    }

    #[tokio::test]
    async fn test_dual_storage_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tool-usage.jsonl");
        let storage = DualStorage::new(FileStorage::new(&path).unwrap());

        storage
            .append(&sample_record(r#"{"session_id": "sess-1"}"#))
            .await
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }
}

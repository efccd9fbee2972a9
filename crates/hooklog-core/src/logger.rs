//! Hook logger implementation.
//!
//! Ties the configuration to a storage backend and appends one record per
//! invocation.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::HookConfig;
use crate::error::HookError;
use crate::event::LogRecord;
use crate::storage::{DualStorage, FileStorage, RecordStorage};

/// The main tool-use logger.
pub struct HookLogger {
    config: HookConfig,
    storage: Arc<dyn RecordStorage>,
}

impl HookLogger {
    /// Create a logger with the storage backend the configuration asks for.
    ///
    /// The log directory is created here, before any input is read, so an
    /// unwritable location fails the invocation up front.
    pub fn new(config: HookConfig) -> Result<Self, HookError> {
        let file = FileStorage::new(config.log_path())?;
        let storage: Arc<dyn RecordStorage> = if config.echo_stdout {
            Arc::new(DualStorage::new(file))
        } else {
            Arc::new(file)
        };
        Ok(Self { config, storage })
    }

    /// Create a logger with a custom storage backend.
    pub fn with_storage(config: HookConfig, storage: Arc<dyn RecordStorage>) -> Self {
        Self { config, storage }
    }

    /// The path records are appended to.
    pub fn log_path(&self) -> PathBuf {
        self.config.log_path()
    }

    /// Append one record.
    pub async fn log(&self, record: &LogRecord) -> Result<(), HookError> {
        tracing::debug!(
            tool_name = %record.tool_name,
            session_id = %record.session_id,
            "tool-use record"
        );
        self.storage.append(record).await
    }
}

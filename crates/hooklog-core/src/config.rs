//! Logger configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the tool-use logger.
///
/// The paths are injected here rather than hard-coded in the storage layer so
/// tests can point the logger at a temporary directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookConfig {
    /// Directory the log file lives in. Created on demand; an already
    /// existing directory is not an error.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// File name of the newline-delimited JSON log.
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Also print each record to stdout.
    #[serde(default)]
    pub echo_stdout: bool,
}

impl HookConfig {
    /// Full path of the log file.
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.file_name)
    }
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            file_name: default_file_name(),
            echo_stdout: false,
        }
    }
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("./logs")
}

fn default_file_name() -> String {
    "tool-usage.jsonl".to_string()
}

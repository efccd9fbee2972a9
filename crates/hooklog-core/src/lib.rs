//! # hooklog-core
//!
//! Event model and storage for `hooklog`, a logging hook for tool-execution
//! frameworks.
//!
//! The hosting framework runs the `hooklog` binary once per tool invocation
//! and pipes a JSON object describing the call to its stdin. This crate
//! provides:
//! - the schema-less [`ToolUseEvent`] boundary type and its typed projection
//!   [`LogRecord`]
//! - storage backends that append records as newline-delimited JSON
//! - the [`HookLogger`] front door tying configuration to a backend
//!
//! ## Record format
//!
//! One JSON object per line in `<log_dir>/<file_name>`:
//!
//! ```text
//! {"timestamp":"2026-08-26T09:14:03.512331+02:00","tool_name":"Bash","tool_input":{"command":"ls"},"session_id":"sess-42"}
//! ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use hooklog_core::{HookConfig, HookLogger, LogRecord, ToolUseEvent};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let logger = HookLogger::new(HookConfig::default())?;
//!
//! let event = ToolUseEvent::from_json(r#"{"tool_name": "Bash"}"#)?;
//! logger.log(&LogRecord::from_event(&event)).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod logger;
pub mod storage;

pub use config::HookConfig;
pub use error::HookError;
pub use event::{LogRecord, ToolUseEvent};
pub use logger::HookLogger;
pub use storage::{ConsoleStorage, DualStorage, FileStorage, RecordStorage};

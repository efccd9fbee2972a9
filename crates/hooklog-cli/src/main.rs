use clap::Parser;
use hooklog_core::{HookConfig, HookLogger, LogRecord, ToolUseEvent};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "hooklog",
    version,
    about = "Append one tool-use event from stdin to a JSONL log"
)]
struct Cli {
    /// Directory the log file is written to.
    #[arg(long, default_value = "./logs")]
    log_dir: PathBuf,

    /// Name of the log file inside the log directory.
    #[arg(long, default_value = "tool-usage.jsonl")]
    file_name: String,

    /// Also print the record to stdout.
    #[arg(long, default_value_t = false)]
    echo: bool,
}

impl Cli {
    fn into_config(self) -> HookConfig {
        HookConfig {
            log_dir: self.log_dir,
            file_name: self.file_name,
            echo_stdout: self.echo,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr only; the log file never sees them.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut raw = String::new();
    tokio::io::stdin().read_to_string(&mut raw).await?;

    run(cli.into_config(), &raw).await
}

/// The whole pipeline: parse the event, project it, append it. Any error
/// propagates to `main` and exits the process non-zero with nothing written.
async fn run(config: HookConfig, raw: &str) -> anyhow::Result<()> {
    // Creating the logger first ensures the log directory exists (or fails)
    // before the event is parsed.
    let logger = HookLogger::new(config)?;

    let event = ToolUseEvent::from_json(raw)?;
    let record = LogRecord::from_event(&event);

    logger.log(&record).await?;
    tracing::debug!(path = %logger.log_path().display(), "record appended");

    Ok(())
}

//! File logging for the browser
//!
//! The TUI owns the terminal, so every log line goes to a daily rolling file
//! under `<data_local_dir>/bookview/logs/`. Verbosity comes from `BOOKVIEW_LOG`
//! using `EnvFilter` directive syntax:
//!
//! ```bash
//! BOOKVIEW_LOG=bookview_app=debug bookview --catalog demos/catalog.json
//! ```

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding filter directives
pub const LOG_ENV: &str = "BOOKVIEW_LOG";

/// Directives used when `BOOKVIEW_LOG` is unset, blank or unparsable
pub const DEFAULT_FILTER: &str =
    "bookview=info,bookview_core=info,bookview_app=info,bookview_tui=info,warn";

const LOG_FILE_NAME: &str = "bookview.log";

/// Resolved log destination and verbosity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub dir: PathBuf,
    pub directives: String,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::new(log_directory(), std::env::var(LOG_ENV).ok())
    }

    pub fn new(dir: PathBuf, directives: Option<String>) -> Self {
        let directives = directives
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        Self { dir, directives }
    }

    /// Path of the file the appender writes today's lines to
    pub fn log_file(&self) -> PathBuf {
        self.dir.join(LOG_FILE_NAME)
    }

    /// The configured filter, or the default one with the rejected directives
    fn filter(&self) -> (EnvFilter, Option<String>) {
        match EnvFilter::try_new(&self.directives) {
            Ok(filter) => (filter, None),
            Err(e) => (
                EnvFilter::new(DEFAULT_FILTER),
                Some(format!("{:?}: {}", self.directives, e)),
            ),
        }
    }
}

/// Install the global subscriber using `BOOKVIEW_LOG`. Returns the log file path.
pub fn init() -> Result<PathBuf> {
    init_with(&LogSettings::from_env())
}

pub fn init_with(settings: &LogSettings) -> Result<PathBuf> {
    std::fs::create_dir_all(&settings.dir)?;
    let appender = RollingFileAppender::new(Rotation::DAILY, &settings.dir, LOG_FILE_NAME);
    let (filter, rejected) = settings.filter();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    log_banner(&settings.dir);
    if let Some(rejected) = rejected {
        tracing::warn!("Ignoring invalid {} {}", LOG_ENV, rejected);
    }

    Ok(settings.log_file())
}

fn log_banner(dir: &Path) {
    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("bookview {} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");
}

fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bookview")
        .join("logs")
}

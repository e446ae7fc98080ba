//! Logging initialization
//!
//! TUI mode: logs to `<base>/logs/savr-{datetime}.log`, never to the screen.
//! CLI mode: logs to stderr.

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{SavrPaths, Settings};

/// Keeps the log writer alive for the duration of the program
pub struct LoggingHandle {
    /// Flushes buffered log lines when dropped
    pub _guard: Option<WorkerGuard>,

    /// Path to the log file (only set in TUI mode with file logging enabled)
    pub log_file_path: Option<PathBuf>,
}

/// Level filter: `RUST_LOG` wins, then `--debug`, then settings
fn build_filter(settings: &Settings, debug_override: bool) -> EnvFilter {
    let level = if debug_override {
        "debug".to_string()
    } else {
        settings.logging.level.clone()
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// File name for a log started now
pub fn log_file_name() -> String {
    let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
    format!("savr-{}.log", timestamp)
}

/// Initialize logging based on mode and settings
pub fn init_logging(
    paths: &SavrPaths,
    settings: &Settings,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let filter = build_filter(settings, debug_override);

    if is_tui_mode {
        if !settings.logging.to_file {
            // The TUI owns the terminal; without a file there is nowhere to log
            return Ok(LoggingHandle {
                _guard: None,
                log_file_path: None,
            });
        }

        let logs_dir = paths.log_dir();
        std::fs::create_dir_all(&logs_dir)?;

        let log_filename = log_file_name();
        let log_file_path = logs_dir.join(&log_filename);

        let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .try_init()?;

        Ok(LoggingHandle {
            _guard: Some(guard),
            log_file_path: Some(log_file_path),
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;

        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_name_format() {
        let name = log_file_name();
        assert!(name.starts_with("savr-"));
        assert!(name.ends_with("Z.log"));
        // savr- + YYYYMMDDTHHMMSSZ + .log
        assert_eq!(name.len(), 5 + 16 + 4);
    }

    #[test]
    fn test_tui_mode_without_file_logging() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SavrPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();
        settings.logging.to_file = false;

        let handle = init_logging(&paths, &settings, true, false).unwrap();
        assert!(handle.log_file_path.is_none());
        assert!(!paths.log_dir().exists());
    }
}

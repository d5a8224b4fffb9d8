use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::model::config::LogConfig;

/// Environment variable that overrides `[log] level`
pub const LOG_ENV: &str = "MATCHBOOK_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// Where log lines may go when no log file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// CLI commands: stderr is free
    Stderr,
    /// The TUI owns the terminal, so only a configured file is used
    FileOnly,
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("could not open log file {path}: {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Install the global subscriber. Calling it twice is harmless; the first
/// subscriber stays.
pub fn init_logging(config: &LogConfig, target: LogTarget) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_deref().unwrap_or(DEFAULT_LEVEL)));
    let registry = tracing_subscriber::registry().with(filter);

    match (&config.file, target) {
        (Some(path), _) => {
            let path = PathBuf::from(path);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| LoggingError::OpenError { path, source: e })?;
            let _ = registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .try_init();
        }
        (None, LogTarget::Stderr) => {
            let _ = registry
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init();
        }
        (None, LogTarget::FileOnly) => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_only_without_file_is_a_no_op() {
        assert!(init_logging(&LogConfig::default(), LogTarget::FileOnly).is_ok());
    }

    #[test]
    fn unopenable_log_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let config = LogConfig {
            level: None,
            file: Some(tmp.path().join("missing/dir/mb.log").display().to_string()),
        };
        let err = init_logging(&config, LogTarget::FileOnly).unwrap_err();
        assert!(matches!(err, LoggingError::OpenError { .. }));
    }
}

//! Tracing subscriber setup.
//!
//! The interactive form owns the terminal, so events go to a log file.
//! One-shot commands fall back to stderr when the file cannot be opened.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file '{path}': {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Where log output ends up when the log file is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Interactive session: the terminal is taken, give up.
    None,
    /// One-shot command: write to stderr.
    Stderr,
}

fn filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Returns the file being written, if any.
pub fn init(config: &LoggingConfig, fallback: Fallback) -> Result<Option<PathBuf>, LoggingError> {
    let path = config.log_path();

    match open_log_file(&path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter(config))
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .with_timer(UtcTime::rfc_3339())
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| LoggingError::Install(e.to_string()))?;
            tracing::debug!(path = %path.display(), "Logging to file");
            Ok(Some(path))
        }
        Err(source) if fallback == Fallback::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter(config))
                .with_target(true)
                .with_level(true)
                .with_timer(UtcTime::rfc_3339())
                .with_writer(io::stderr)
                .try_init()
                .map_err(|e| LoggingError::Install(e.to_string()))?;
            tracing::warn!(
                path = %path.display(),
                error = %source,
                "Log file unavailable, logging to stderr"
            );
            Ok(None)
        }
        Err(source) => Err(LoggingError::OpenLogFile { path, source }),
    }
}

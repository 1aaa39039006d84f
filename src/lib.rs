//! Roster - student list and course directory core
//!
//! This library provides the core functionality behind the two roster screens:
//! a paginated, locally cached list of mock students and a searchable course
//! directory. It is built as a static/dynamic library so mobile shells can link
//! it, and ships a terminal front end (`roster-tui`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod courses;
pub mod roster;
pub mod storage;
pub mod student;
pub mod tui;

#[cfg(test)]
mod tests;

/// Result type alias for Roster operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Roster operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Storage operation error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// SQLite database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Initialize logging
///
/// Logs go to `log_path` when given (terminal front ends must not write to
/// stderr while drawing), otherwise to stderr. Calling this more than once
/// keeps the first subscriber.
pub fn init_logging(log_path: Option<&std::path::Path>) -> Result<()> {
    match log_path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            let _ = tracing_subscriber::fmt()
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt().try_init();
        }
    }
    Ok(())
}

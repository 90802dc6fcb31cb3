//! Error types for the DailyLog core library.

use thiserror::Error;

/// All errors that can occur within the DailyLog core library.
#[derive(Debug, Error)]
pub enum DailylogError {
    /// A SQLite operation failed.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings could not be serialized or deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A CSV read or write failed below the row level.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A shortcut was added under a label that is already taken.
    #[error("A shortcut labelled '{0}' already exists")]
    LabelExists(String),

    /// A shortcut label was requested that does not exist in the store.
    #[error("Shortcut not found: {0}")]
    ShortcutNotFound(String),

    /// The opened file is not a valid DailyLog shortcut database.
    #[error("Invalid shortcut store: {0}")]
    InvalidStore(String),

    /// No log file has been selected yet.
    #[error("No log file selected")]
    NoFileSelected,

    /// The log file exists but the process may not read or write it.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// A date format string contains specifiers chrono cannot render.
    #[error("Unsupported date format: {0}")]
    InvalidDateFormat(String),

    /// An imported CSV row could not be decoded into a shortcut.
    #[error("Invalid row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
}

/// Convenience alias that pins the error type to [`DailylogError`].
pub type Result<T> = std::result::Result<T, DailylogError>;

impl DailylogError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Database(e) => format!("Failed to access shortcuts: {e}"),
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Settings format error: {e}"),
            Self::Csv(e) => format!("Could not read shortcut file: {e}"),
            Self::LabelExists(label) => format!("'{label}' is already taken"),
            Self::ShortcutNotFound(label) => format!("No shortcut labelled '{label}'"),
            Self::InvalidStore(_) => "Could not open the shortcut database".to_string(),
            Self::NoFileSelected => {
                "Select a log file first (dailylog file set <PATH>)".to_string()
            }
            Self::PermissionDenied(path) => format!("Not allowed to access {path}"),
            Self::InvalidDateFormat(fmt) => {
                format!("Unsupported date format '{fmt}', try something else")
            }
            Self::InvalidRow { row, reason } => format!("Row {row} is malformed: {reason}"),
        }
    }
}

//! Error types for monthcal.

use thiserror::Error;

/// Errors that can occur in monthcal operations.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid event: {0}")]
    InvalidForm(String),

    #[error("Invalid date/time '{0}'. Expected YYYY-MM-DDTHH:MM")]
    InvalidDateTime(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Invalid category '{0}'. Expected one of: work, personal, other")]
    InvalidColor(String),
}

/// Result type alias for monthcal operations.
pub type CalendarResult<T> = Result<T, CalendarError>;

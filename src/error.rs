//! Crate error type.
//!
//! Two fatal categories exist: configuration problems (bad parameters,
//! unknown teams, no slots derivable) and format problems (unparseable
//! time-of-day strings). Both abort a scheduling run before any partial
//! output is produced. Matches that cannot be placed are NOT errors —
//! they are reported through the unscheduled list.

use serde::{Deserialize, Serialize};

/// Result alias for fallible scheduling operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// A fatal scheduling error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleError {
    /// Invalid or missing scheduling parameters.
    Configuration { message: String },
    /// Malformed input where parsing is required (e.g. "HH:MM" times).
    Format { message: String },
}

impl ScheduleError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a format error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// The error message without its category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Configuration { message } | Self::Format { message } => message,
        }
    }
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration { message } => write!(f, "configuration error: {message}"),
            Self::Format { message } => write!(f, "format error: {message}"),
        }
    }
}

impl std::error::Error for ScheduleError {}

//! Error types for the logger system
//!
//! Logging calls themselves never fail: every message, level, and argument
//! combination is accepted, and malformed templates degrade to best-effort
//! text. The only fallible surface is parsing a [`LogLevel`] from a string.
//!
//! [`LogLevel`]: super::log_level::LogLevel

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unrecognized log level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(name.into())
    }
}

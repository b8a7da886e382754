//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. They use Rust's
//! compile-time formatting; for runtime `{}` templates with positional
//! arguments, use [`Logger::log_formatted`].
//!
//! [`Logger::log_formatted`]: crate::core::Logger::log_formatted
//!
//! # Examples
//!
//! ```
//! use membuf_logger::prelude::*;
//! use membuf_logger::info;
//!
//! let logger = get_logger("server");
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use membuf_logger::prelude::*;
/// # let logger = get_logger("test");
/// use membuf_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Logger, LoggerContext, LogLevel};
    use std::sync::Arc;

    fn fresh_logger() -> Logger {
        Logger::new("macros", Arc::new(LoggerContext::new()))
    }

    #[test]
    fn test_log_macro() {
        let logger = fresh_logger();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Error, "Formatted: {}", 42);

        let contents = logger.contents();
        assert!(contents.contains("INFO macros - Test message"));
        assert!(contents.contains("ERROR macros - Formatted: 42"));
    }

    #[test]
    fn test_per_level_macros() {
        let logger = fresh_logger();
        trace!(logger, "Trace message");
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
        fatal!(logger, "Critical failure: {}", "system");

        let contents = logger.contents();
        assert_eq!(contents.lines().count(), 6);
        assert!(contents.contains("TRACE macros - Trace message"));
        assert!(contents.contains("FATAL macros - Critical failure: system"));
    }

    #[test]
    fn test_macro_respects_threshold() {
        let logger = fresh_logger();
        logger.set_level(LogLevel::Warn);

        debug!(logger, "Suppressed");
        warn!(logger, "Recorded");

        let contents = logger.contents();
        assert!(!contents.contains("Suppressed"));
        assert!(contents.contains("Recorded"));
    }
}

//! Core sink types and traits

pub mod context;
pub mod error;
pub mod format;
pub mod log_level;
pub mod log_line;
pub mod logger;

pub use context::{LoggerContext, DEFAULT_LEVEL};
pub use error::{LoggerError, Result};
pub use format::{BraceFormatter, ErrorArg, FormattedMessage, LogArg, MessageFormatter};
pub use log_level::LogLevel;
pub use log_line::LINE_SEPARATOR;
pub use logger::Logger;

//! # Membuf Logger
//!
//! An in-memory string-buffer logging sink for unit-test assertions: log
//! lines accumulate in one shared text buffer that test code can inspect,
//! filter by level, and reset between test cases.
//!
//! ## Features
//!
//! - **Assertion Friendly**: the whole log is one string, ready for
//!   substring matching
//! - **Level Filtering**: one process-wide threshold, `TRACE` by default
//! - **Thread Safe**: concurrent calls never interleave within a line
//! - **Easy to Use**: named façades over a single shared sink
//!
//! ## Example
//!
//! ```
//! use membuf_logger::prelude::*;
//!
//! let logger = get_logger("example");
//! logger.hard_reset();
//!
//! logger.info("Server started");
//! assert!(logger.contents().contains("INFO example - Server started"));
//! ```

pub mod core;
pub mod factory;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        BraceFormatter, ErrorArg, FormattedMessage, LogArg, LogLevel, Logger, LoggerContext,
        LoggerError, MessageFormatter, Result, DEFAULT_LEVEL, LINE_SEPARATOR,
    };
    pub use crate::factory::{get_logger, global_context};
}

pub use crate::core::{
    BraceFormatter, ErrorArg, FormattedMessage, LogArg, LogLevel, Logger, LoggerContext,
    LoggerError, MessageFormatter, Result, DEFAULT_LEVEL, LINE_SEPARATOR,
};
pub use factory::{get_logger, global_context};

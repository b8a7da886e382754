//! Process-wide logger factory
//!
//! Every name resolves to a façade over the single shared context, so all
//! loggers obtained here accumulate into one buffer and share one threshold.

use crate::core::{Logger, LoggerContext};
use std::sync::{Arc, OnceLock};

static GLOBAL_CONTEXT: OnceLock<Arc<LoggerContext>> = OnceLock::new();

/// The shared context backing every logger returned by [`get_logger`].
pub fn global_context() -> &'static Arc<LoggerContext> {
    GLOBAL_CONTEXT.get_or_init(|| Arc::new(LoggerContext::new()))
}

/// Get a named logger façade bound to the shared sink.
pub fn get_logger(name: impl Into<String>) -> Logger {
    Logger::new(name, Arc::clone(global_context()))
}

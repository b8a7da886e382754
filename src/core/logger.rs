//! Logger façade implementation
//!
//! A [`Logger`] is a named handle over a shared [`LoggerContext`]. The name
//! is recorded in every rendered line; it carries no other state. Many
//! façades, one buffer, one threshold.

use super::context::LoggerContext;
use super::format::{ErrorArg, LogArg};
use super::log_level::LogLevel;
use super::log_line::render_line;
use std::sync::Arc;

pub struct Logger {
    name: String,
    ctx: Arc<LoggerContext>,
}

impl Logger {
    #[must_use]
    pub fn new(name: impl Into<String>, ctx: Arc<LoggerContext>) -> Self {
        Self {
            name: name.into(),
            ctx,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared context this façade writes into.
    pub fn context(&self) -> &Arc<LoggerContext> {
        &self.ctx
    }

    /// The single generic logging operation: render one line and append it.
    ///
    /// `error` is the pre-rendered attached-error text; `None` means no
    /// error, and nothing is rendered in its place.
    fn emit(&self, level: LogLevel, message: &str, error: Option<&str>) {
        if !self.ctx.is_enabled(level) {
            return;
        }
        let line = render_line(level, &self.name, message, error);
        self.ctx.append(&line);
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        self.emit(level, message.as_ref(), None);
    }

    /// Log a message with an attached error.
    ///
    /// The error is rendered as its type name plus its `Display` output (the
    /// type name alone when that output is empty), separated from the
    /// message by a single space. Rendering only happens when the level is
    /// enabled.
    pub fn log_with_error<E: std::error::Error>(
        &self,
        level: LogLevel,
        message: impl AsRef<str>,
        error: &E,
    ) {
        if !self.ctx.is_enabled(level) {
            return;
        }
        let rendered = ErrorArg::new(error).render();
        self.emit(level, message.as_ref(), Some(&rendered));
    }

    /// Log a parameterized message.
    ///
    /// The context's formatter substitutes `args` into `template` and may
    /// extract a trailing error argument; the result is logged as with
    /// [`log_with_error`]. When the level is disabled the formatter is not
    /// invoked at all, so suppressed calls pay no formatting cost.
    ///
    /// [`log_with_error`]: Logger::log_with_error
    pub fn log_formatted(&self, level: LogLevel, template: &str, args: &[LogArg<'_>]) {
        if !self.ctx.is_enabled(level) {
            return;
        }
        let rendered = self.ctx.formatter().format(template, args);
        self.emit(level, &rendered.message, rendered.error.as_deref());
    }

    #[inline]
    pub fn trace(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Fatal, message);
    }

    pub fn is_trace_enabled(&self) -> bool {
        self.ctx.is_enabled(LogLevel::Trace)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.ctx.is_enabled(LogLevel::Debug)
    }

    pub fn is_info_enabled(&self) -> bool {
        self.ctx.is_enabled(LogLevel::Info)
    }

    pub fn is_warn_enabled(&self) -> bool {
        self.ctx.is_enabled(LogLevel::Warn)
    }

    pub fn is_error_enabled(&self) -> bool {
        self.ctx.is_enabled(LogLevel::Error)
    }

    pub fn is_fatal_enabled(&self) -> bool {
        self.ctx.is_enabled(LogLevel::Fatal)
    }

    // Read-surface passthroughs, so test code can assert and reset through
    // whichever façade it already holds.

    pub fn contents(&self) -> String {
        self.ctx.contents()
    }

    pub fn clear(&self) {
        self.ctx.clear();
    }

    pub fn hard_reset(&self) {
        self.ctx.hard_reset();
    }

    pub fn level(&self) -> LogLevel {
        self.ctx.level()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.ctx.set_level(level);
    }
}

impl Clone for Logger {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            ctx: Arc::clone(&self.ctx),
        }
    }
}

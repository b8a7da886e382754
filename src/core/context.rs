//! Shared sink state: the log buffer and the level threshold
//!
//! All logger façades created over one [`LoggerContext`] write into the same
//! buffer and are filtered by the same threshold. The sharing is explicit —
//! façades receive an `Arc<LoggerContext>` at construction — so a test that
//! wants an isolated sink simply builds a fresh context.

use super::format::{BraceFormatter, MessageFormatter};
use super::log_level::LogLevel;
use parking_lot::{Mutex, RwLock};

/// Initial and post-reset threshold: most verbose, nothing filtered.
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Trace;

pub struct LoggerContext {
    buffer: Mutex<String>,
    threshold: RwLock<LogLevel>,
    formatter: Box<dyn MessageFormatter>,
}

impl LoggerContext {
    #[must_use]
    pub fn new() -> Self {
        Self::with_formatter(BraceFormatter)
    }

    /// Create a context with a custom message formatter.
    #[must_use]
    pub fn with_formatter(formatter: impl MessageFormatter + 'static) -> Self {
        Self {
            buffer: Mutex::new(String::new()),
            threshold: RwLock::new(DEFAULT_LEVEL),
            formatter: Box::new(formatter),
        }
    }

    /// True iff a call at `level` would currently be recorded.
    ///
    /// Ties resolve in favor of logging: a call exactly at the threshold is
    /// recorded.
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= *self.threshold.read()
    }

    pub fn level(&self) -> LogLevel {
        *self.threshold.read()
    }

    /// Replace the threshold. Takes effect for all subsequent calls from any
    /// façade; calls already in flight may still see the old value.
    pub fn set_level(&self, level: LogLevel) {
        *self.threshold.write() = level;
    }

    /// Restore the threshold to [`DEFAULT_LEVEL`].
    pub fn reset_level(&self) {
        self.set_level(DEFAULT_LEVEL);
    }

    /// Snapshot copy of the whole buffer as of this call.
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Empty the buffer. The threshold is untouched.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    /// Empty the buffer and restore the default threshold: the canonical
    /// start-of-test-case operation.
    pub fn hard_reset(&self) {
        self.clear();
        self.reset_level();
    }

    /// Append one rendered line under the buffer lock, so concurrent lines
    /// never interleave their characters.
    pub(crate) fn append(&self, line: &str) {
        self.buffer.lock().push_str(line);
    }

    pub(crate) fn formatter(&self) -> &dyn MessageFormatter {
        self.formatter.as_ref()
    }
}

impl Default for LoggerContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_is_most_verbose() {
        let ctx = LoggerContext::new();
        assert_eq!(ctx.level(), LogLevel::Trace);
        for level in LogLevel::all() {
            assert!(ctx.is_enabled(level));
        }
    }

    #[test]
    fn test_threshold_excludes_more_verbose_levels() {
        let ctx = LoggerContext::new();
        ctx.set_level(LogLevel::Warn);

        assert!(!ctx.is_enabled(LogLevel::Trace));
        assert!(!ctx.is_enabled(LogLevel::Debug));
        assert!(!ctx.is_enabled(LogLevel::Info));
        assert!(ctx.is_enabled(LogLevel::Warn));
        assert!(ctx.is_enabled(LogLevel::Error));
        assert!(ctx.is_enabled(LogLevel::Fatal));
    }

    #[test]
    fn test_clear_keeps_threshold() {
        let ctx = LoggerContext::new();
        ctx.set_level(LogLevel::Error);
        ctx.append("line\n");

        ctx.clear();

        assert_eq!(ctx.contents(), "");
        assert_eq!(ctx.level(), LogLevel::Error);
    }

    #[test]
    fn test_hard_reset_restores_initial_state() {
        let ctx = LoggerContext::new();
        ctx.set_level(LogLevel::Fatal);
        ctx.append("line\n");

        ctx.hard_reset();

        assert_eq!(ctx.contents(), "");
        assert_eq!(ctx.level(), DEFAULT_LEVEL);
        assert!(ctx.is_enabled(LogLevel::Trace));
    }

    #[test]
    fn test_contents_is_a_snapshot() {
        let ctx = LoggerContext::new();
        ctx.append("first\n");
        let snapshot = ctx.contents();
        ctx.append("second\n");

        assert_eq!(snapshot, "first\n");
        assert_eq!(ctx.contents(), "first\nsecond\n");
    }
}

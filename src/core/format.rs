//! Message formatting seam for parameterized logging calls
//!
//! The sink treats argument substitution as a pluggable collaborator: a
//! [`MessageFormatter`] turns a template plus an ordered argument list into a
//! final message and, optionally, an error the formatter chose to attach to
//! the line instead of substituting. [`BraceFormatter`] is the default
//! implementation; tests can inject their own through
//! [`LoggerContext::with_formatter`].
//!
//! [`LoggerContext::with_formatter`]: super::context::LoggerContext::with_formatter

use std::error::Error;
use std::fmt;
use std::fmt::Write as _;

/// One argument to a parameterized logging call.
pub enum LogArg<'a> {
    /// A plain value, substituted into the next `{}` placeholder.
    Value(&'a dyn fmt::Display),
    /// An error value. When it is the last argument and no placeholder is
    /// left to consume it, the formatter returns it separately so the sink
    /// appends it after the message.
    Error(ErrorArg<'a>),
}

impl<'a> LogArg<'a> {
    pub fn value(value: &'a dyn fmt::Display) -> Self {
        LogArg::Value(value)
    }

    pub fn error<E: Error>(error: &'a E) -> Self {
        LogArg::Error(ErrorArg::new(error))
    }
}

/// An error captured together with its concrete type name.
///
/// Rendered as `<type name>: <message>`, or just the type name when the
/// error's `Display` output is empty — mirroring how exception-style loggers
/// print an attached error.
#[derive(Clone, Copy)]
pub struct ErrorArg<'a> {
    type_name: &'static str,
    inner: &'a (dyn Error + 'a),
}

impl<'a> ErrorArg<'a> {
    pub fn new<E: Error>(error: &'a E) -> Self {
        Self {
            type_name: std::any::type_name::<E>(),
            inner: error,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Render the attached-error text for a log line.
    pub fn render(&self) -> String {
        let message = self.inner.to_string();
        if message.is_empty() {
            self.type_name.to_string()
        } else {
            format!("{}: {}", self.type_name, message)
        }
    }
}

impl fmt::Display for ErrorArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl fmt::Debug for ErrorArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorArg")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Result of rendering a template.
pub struct FormattedMessage {
    /// The message with placeholders substituted.
    pub message: String,
    /// Rendered text of an error that was extracted rather than substituted.
    pub error: Option<String>,
}

/// Collaborator that renders a template plus positional arguments.
///
/// Implementations must never fail: a template that does not match its
/// arguments degrades to best-effort text. A logging utility aimed at tests
/// must not itself become the reason a test aborts.
pub trait MessageFormatter: Send + Sync {
    fn format(&self, template: &str, args: &[LogArg<'_>]) -> FormattedMessage;
}

/// Default formatter: `{}` placeholders, substituted left to right.
///
/// If the last argument is an error and the template has fewer placeholders
/// than there are arguments, that error is returned separately instead of
/// substituted. Surplus placeholders stay literal; surplus plain arguments
/// are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct BraceFormatter;

impl MessageFormatter for BraceFormatter {
    fn format(&self, template: &str, args: &[LogArg<'_>]) -> FormattedMessage {
        let placeholders = template.matches("{}").count();

        let (args, error) = match args.split_last() {
            Some((LogArg::Error(err), head)) if placeholders < args.len() => {
                (head, Some(err.render()))
            }
            _ => (args, None),
        };

        let mut message = String::with_capacity(template.len());
        let mut rest = template;
        let mut pending = args.iter();
        while let Some(pos) = rest.find("{}") {
            let Some(arg) = pending.next() else { break };
            message.push_str(&rest[..pos]);
            match arg {
                LogArg::Value(value) => {
                    let _ = write!(message, "{}", value);
                }
                LogArg::Error(err) => message.push_str(&err.render()),
            }
            rest = &rest[pos + 2..];
        }
        message.push_str(rest);

        FormattedMessage { message, error }
    }
}

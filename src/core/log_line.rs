//! Rendering of individual log lines

use super::log_level::LogLevel;
use std::cell::RefCell;

/// Terminator appended to every rendered line.
pub const LINE_SEPARATOR: &str = "\n";

// Thread-local cache for the thread label to avoid repeated allocations
thread_local! {
    static THREAD_LABEL_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Get the cached label for the calling thread, computing it on first access.
///
/// The label is the thread's name when it has one, otherwise its id.
fn thread_label() -> String {
    THREAD_LABEL_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.is_none() {
            let current = std::thread::current();
            let label = match current.name() {
                Some(name) => name.to_string(),
                None => format!("{:?}", current.id()),
            };
            *cache = Some(label);
        }
        cache
            .as_ref()
            .expect("thread label cache initialized in previous line")
            .clone()
    })
}

/// Render one log line in the sink's fixed format:
/// `[<thread label>] <LEVEL> <logger name> - <message>`, followed by a space
/// and the rendered error when one is attached, then the line terminator.
///
/// The message is appended verbatim; assertions in test code rely on the
/// exact bytes of this format.
pub(crate) fn render_line(
    level: LogLevel,
    logger_name: &str,
    message: &str,
    error: Option<&str>,
) -> String {
    let mut line = format!(
        "[{}] {} {} - {}",
        thread_label(),
        level.to_str(),
        logger_name,
        message
    );
    if let Some(error) = error {
        line.push(' ');
        line.push_str(error);
    }
    line.push_str(LINE_SEPARATOR);
    line
}

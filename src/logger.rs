//! Terminal logging with colored module prefixes.
//!
//! Log lines go to stderr so stdout only carries command output
//! (`resolve --json`). Colors follow `--color` through owo-colors'
//! override, or stderr's color support when it is `auto`.
//!
//! ```ignore
//! log!("routes"; "{} routes", count);
//! debug!("output"; "{} unchanged", path.display()); // only with --verbose
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream, Style};
use std::{
    fmt::Display,
    io::{IsTerminal, Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);

    let mut stderr = stderr().lock();
    if stderr.is_terminal() {
        execute!(stderr, Clear(ClearType::UntilNewLine)).ok();
    }
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Style `text` for stderr, or leave it plain when colors are off.
pub fn paint(text: impl Display, style: Style) -> String {
    text.if_supports_color(Stream::Stderr, |t| t.style(style))
        .to_string()
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str) -> String {
    let style = match module.to_ascii_lowercase().as_str() {
        "routes" | "output" => Style::new().bright_blue(),
        "validate" | "resolve" => Style::new().bright_green(),
        "error" => Style::new().bright_red(),
        "warning" => Style::new().yellow(),
        _ => Style::new().bright_yellow(),
    };
    paint(format_args!("[{module}]"), style.bold())
}

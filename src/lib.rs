//! Friendly console messages.
//!
//! Each printer writes one line to stdout: an icon for the message kind, then
//! the template with its vars substituted printf-style and its inline tags
//! (`<title>`, `<warn>`, `<em>`, `<err>`) turned into colors.
//!
//! ```no_run
//! gn::info!("Processing %d items", 5);
//! gn::warn!("<warn>disk low</warn>: %d%% free", 3);
//! ```
//!
//! Errors that should reach the user with a friendly message are built as
//! [`StructuredError`] and printed with [`report_error`]:
//!
//! ```no_run
//! use gn::{Arg, StructuredError};
//!
//! let err = anyhow::Error::new(
//!     StructuredError::new(2, "Could not open <em>%s</em>").with_vars([Arg::from("notes.txt")]),
//! )
//! .context("loading workspace");
//! gn::report_error(&err);
//! ```

mod arg;
mod colorize;
mod config;
mod error;
mod format;
mod message;
mod utils;

pub use arg::Arg;
pub use colorize::{Tag, colorize};
pub use config::ColorMode;
pub use error::{ErrorCode, StructuredError, StructuredResultExt, find_structured, report_error};
pub use format::sprintf;
pub use message::{MessageKind, Printer, UserMessage};
pub use utils::{info, message, progress, success, warn};

/// Converts each expression into an [`Arg`], producing an array.
#[macro_export]
macro_rules! args {
    ($($var:expr),* $(,)?) => {
        [$($crate::Arg::from($var)),*]
    };
}

/// Prints a message without an icon. See [`message()`].
#[macro_export]
macro_rules! message {
    ($template:expr $(, $var:expr)* $(,)?) => {
        $crate::message($template, &$crate::args!($($var),*))
    };
}

/// Prints a warning. See [`warn()`].
#[macro_export]
macro_rules! warn {
    ($template:expr $(, $var:expr)* $(,)?) => {
        $crate::warn($template, &$crate::args!($($var),*))
    };
}

/// Prints an informational message. See [`info()`].
#[macro_export]
macro_rules! info {
    ($template:expr $(, $var:expr)* $(,)?) => {
        $crate::info($template, &$crate::args!($($var),*))
    };
}

/// Prints a progress message. See [`progress()`].
#[macro_export]
macro_rules! progress {
    ($template:expr $(, $var:expr)* $(,)?) => {
        $crate::progress($template, &$crate::args!($($var),*))
    };
}

/// Prints a success message. See [`success()`].
#[macro_export]
macro_rules! success {
    ($template:expr $(, $var:expr)* $(,)?) => {
        $crate::success($template, &$crate::args!($($var),*))
    };
}

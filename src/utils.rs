//! One-call printers for each message kind. Output goes to stdout.

use crate::arg::Arg;
use crate::message::{MessageKind, Printer, UserMessage};

/// Prints a message without an icon.
pub fn message(template: &str, vars: &[Arg]) {
    print(MessageKind::Generic, template, vars);
}

/// Prints a warning with the ⚠️ icon.
pub fn warn(template: &str, vars: &[Arg]) {
    print(MessageKind::Warning, template, vars);
}

/// Prints an informational message with the ℹ️ icon.
pub fn info(template: &str, vars: &[Arg]) {
    print(MessageKind::Info, template, vars);
}

/// Prints a progress message with the ⏳ icon.
pub fn progress(template: &str, vars: &[Arg]) {
    print(MessageKind::Progress, template, vars);
}

/// Prints a success message with the ✅ icon.
pub fn success(template: &str, vars: &[Arg]) {
    print(MessageKind::Success, template, vars);
}

fn print(kind: MessageKind, template: &str, vars: &[Arg]) {
    let msg = UserMessage::new(kind, template, vars);
    if let Err(e) = Printer::stdout().print(&msg) {
        log::warn!("Failed to write message: {}", e);
    }
}

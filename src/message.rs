use crate::arg::Arg;
use crate::colorize::colorize;
use crate::format::sprintf;
use std::io::{self, Stdout, Write};

/// Category of a printed line. Only the icon depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageKind {
    Generic = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    Progress = 4,
    Success = 5,
}

impl MessageKind {
    pub fn icon(self) -> Option<&'static str> {
        match self {
            MessageKind::Generic => None,
            MessageKind::Error => Some("❌"),
            MessageKind::Warning => Some("⚠️"),
            MessageKind::Info => Some("ℹ️"),
            MessageKind::Progress => Some("⏳"),
            MessageKind::Success => Some("✅"),
        }
    }
}

/// A message about to be printed. Built per call and dropped after writing.
#[derive(Debug, Clone, Copy)]
pub struct UserMessage<'a> {
    pub kind: MessageKind,
    pub template: &'a str,
    pub vars: &'a [Arg],
}

impl<'a> UserMessage<'a> {
    pub fn new(kind: MessageKind, template: &'a str, vars: &'a [Arg]) -> Self {
        Self {
            kind,
            template,
            vars,
        }
    }

    /// Substituted and colorized text, without the icon.
    ///
    /// With no vars the template is used verbatim, so `"100%"` stays `"100%"`.
    pub fn text(&self) -> String {
        if self.vars.is_empty() {
            colorize(self.template)
        } else {
            colorize(&sprintf(self.template, self.vars))
        }
    }

    /// The full line: icon, one space, text. Generic lines have no icon.
    pub fn line(&self) -> String {
        match self.kind.icon() {
            Some(icon) => format!("{icon} {}", self.text()),
            None => self.text(),
        }
    }
}

/// Writes rendered messages, one per line.
pub struct Printer<W: Write> {
    out: W,
}

impl Printer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn print(&mut self, msg: &UserMessage<'_>) -> io::Result<()> {
        writeln!(self.out, "{}", msg.line())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::Colorize;
    use test_case::test_case;

    fn printed(msg: &UserMessage<'_>) -> String {
        let mut printer = Printer::new(Vec::new());
        printer.print(msg).unwrap();
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test_case(MessageKind::Info, "info test", "ℹ️"; "info")]
    #[test_case(MessageKind::Success, "success test", "✅"; "success")]
    #[test_case(MessageKind::Warning, "warning test", "⚠️"; "warning")]
    #[test_case(MessageKind::Error, "error test", "❌"; "error")]
    #[test_case(MessageKind::Progress, "progress test", "⏳"; "progress")]
    fn line_starts_with_icon(kind: MessageKind, text: &str, icon: &str) {
        let output = printed(&UserMessage::new(kind, text, &[]));
        assert_eq!(output, format!("{icon} {text}\n"));
    }

    #[test]
    fn generic_has_no_icon() {
        let output = printed(&UserMessage::new(MessageKind::Generic, "test message", &[]));
        assert_eq!(output, "test message\n");
    }

    #[test]
    fn message_with_vars() {
        let vars = [Arg::from("hello"), Arg::from(42)];
        let msg = UserMessage::new(MessageKind::Generic, "test %s %d", &vars);
        assert_eq!(msg.line(), "test hello 42");
    }

    #[test]
    fn info_with_count() {
        let vars = [Arg::from(5)];
        let output = printed(&UserMessage::new(MessageKind::Info, "Processing %d items", &vars));
        assert!(output.contains("ℹ️"));
        assert!(output.contains("Processing 5 items"));
    }

    #[test]
    fn warn_with_tag_and_percent() {
        let vars = [Arg::from(3)];
        let msg = UserMessage::new(MessageKind::Warning, "<warn>disk low</warn>: %d%% free", &vars);
        let output = printed(&msg);

        assert!(output.starts_with("⚠️"));
        assert!(output.contains(&"disk low".yellow().to_string()));
        assert!(output.contains("3% free"));
        assert!(!output.contains("<warn>"));
        assert!(!output.contains("</warn>"));
    }

    #[test_case("100%% done"; "escaped percent")]
    #[test_case("value: %d, name: %s"; "placeholders")]
    fn no_vars_disables_substitution(template: &str) {
        let msg = UserMessage::new(MessageKind::Generic, template, &[]);
        assert_eq!(msg.text(), template);
    }

    #[test]
    fn substitution_runs_before_colorizing() {
        let vars = [Arg::from("data")];
        let msg = UserMessage::new(MessageKind::Progress, "Loading <em>%s</em>...", &vars);
        assert_eq!(msg.line(), format!("⏳ Loading {}...", "data".green()));
    }

    #[test]
    fn kind_discriminants_are_stable() {
        let kinds = [
            MessageKind::Generic,
            MessageKind::Error,
            MessageKind::Warning,
            MessageKind::Info,
            MessageKind::Progress,
            MessageKind::Success,
        ];
        for (expected, kind) in kinds.into_iter().enumerate() {
            assert_eq!(kind as usize, expected);
        }
    }
}

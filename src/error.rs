use crate::arg::Arg;
use crate::format::sprintf;
use crate::message::{MessageKind, Printer, UserMessage};
use std::error::Error as StdError;
use std::fmt;
use std::io::{self, Write};

/// Caller-defined numeric error category. No values are reserved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorCode(pub i32);

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ErrorCode {
    fn from(value: i32) -> Self {
        ErrorCode(value)
    }
}

/// An error carrying a user-facing message template.
///
/// When reported through [`report_error`] the template is printed with the
/// error icon, even if the error is buried under several layers of context.
///
/// With a `cause`, the error is transparent: `Display` shows the cause's text
/// and `source()` continues with the cause's own source. Without one, it
/// shows the formatted template.
#[derive(Debug)]
pub struct StructuredError {
    pub code: ErrorCode,
    pub cause: Option<anyhow::Error>,
    pub template: String,
    pub vars: Vec<Arg>,
}

impl StructuredError {
    pub fn new(code: impl Into<ErrorCode>, template: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            cause: None,
            template: template.into(),
            vars: Vec::new(),
        }
    }

    pub fn with_vars(mut self, vars: impl IntoIterator<Item = Arg>) -> Self {
        self.vars = vars.into_iter().collect();
        self
    }

    pub fn with_cause(mut self, cause: impl Into<anyhow::Error>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// The template rendered as a message of the given kind.
    pub fn message(&self, kind: MessageKind) -> UserMessage<'_> {
        UserMessage::new(kind, &self.template, &self.vars)
    }
}

impl fmt::Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => fmt::Display::fmt(cause, f),
            None if self.vars.is_empty() => f.write_str(&self.template),
            None => f.write_str(&sprintf(&self.template, &self.vars)),
        }
    }
}

impl StdError for StructuredError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().and_then(|cause| cause.source())
    }
}

/// Finds the first [`StructuredError`] in the chain of `err`.
pub fn find_structured(err: &anyhow::Error) -> Option<&StructuredError> {
    err.chain().find_map(|e| e.downcast_ref::<StructuredError>())
}

impl<W: Write> Printer<W> {
    /// Prints the structured message found in `err`, if any, then always
    /// prints the plain `Error: ...` line.
    pub fn report_error(&mut self, err: &anyhow::Error) -> io::Result<()> {
        if let Some(structured) = find_structured(err) {
            log::debug!("Reporting structured error with code {}", structured.code);
            self.print(&structured.message(MessageKind::Error))?;
        }
        let plain = format!("<err>Error:</err> {err:#}");
        self.print(&UserMessage::new(MessageKind::Generic, &plain, &[]))
    }
}

/// Reports `err` on stdout. See [`Printer::report_error`].
pub fn report_error(err: &anyhow::Error) {
    if let Err(e) = Printer::stdout().report_error(err) {
        log::warn!("Failed to write error report: {}", e);
    }
}

/// Wraps failures in a [`StructuredError`], in the manner of `anyhow::Context`.
pub trait StructuredResultExt<T> {
    fn or_structured(
        self,
        code: impl Into<ErrorCode>,
        template: impl Into<String>,
        vars: Vec<Arg>,
    ) -> Result<T, StructuredError>;
}

impl<T, E> StructuredResultExt<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn or_structured(
        self,
        code: impl Into<ErrorCode>,
        template: impl Into<String>,
        vars: Vec<Arg>,
    ) -> Result<T, StructuredError> {
        self.map_err(|e| {
            StructuredError::new(code, template)
                .with_vars(vars)
                .with_cause(e)
        })
    }
}

//! Inline color tags.
//!
//! Supported tags:
//! - `<title>...</title>` green text wrapped in `**`
//! - `<warn>...</warn>` yellow text
//! - `<em>...</em>` green text
//! - `<err>...</err>` red text
//!
//! Tags do not nest. An unterminated tag is left in the text as is.

use colored::Colorize;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<title>(.*?)</title>").expect("Failed to create title tag regex")
});
static WARN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<warn>(.*?)</warn>").expect("Failed to create warn tag regex")
});
static EM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<em>(.*?)</em>").expect("Failed to create em tag regex")
});
static ERR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<err>(.*?)</err>").expect("Failed to create err tag regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Title,
    Warn,
    Em,
    Err,
}

impl Tag {
    /// Resolution order. Each pass runs on the output of the previous one.
    pub const ALL: [Tag; 4] = [Tag::Title, Tag::Warn, Tag::Em, Tag::Err];

    pub fn name(self) -> &'static str {
        match self {
            Tag::Title => "title",
            Tag::Warn => "warn",
            Tag::Em => "em",
            Tag::Err => "err",
        }
    }

    pub fn open(self) -> String {
        format!("<{}>", self.name())
    }

    pub fn close(self) -> String {
        format!("</{}>", self.name())
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Tag::Title => &*TITLE_RE,
            Tag::Warn => &*WARN_RE,
            Tag::Em => &*EM_RE,
            Tag::Err => &*ERR_RE,
        }
    }

    /// Decorates the inner text of one tag occurrence.
    pub fn decorate(self, inner: &str) -> String {
        match self {
            Tag::Title => format!("**{}**", inner.green()),
            Tag::Warn => inner.yellow().to_string(),
            Tag::Em => inner.green().to_string(),
            Tag::Err => inner.red().to_string(),
        }
    }

    fn resolve(self, msg: &str) -> String {
        self.pattern()
            .replace_all(msg, |caps: &Captures<'_>| self.decorate(&caps[1]))
            .into_owned()
    }
}

/// Replaces every tagged span in `msg` with its decorated inner text.
pub fn colorize(msg: &str) -> String {
    Tag::ALL
        .iter()
        .fold(msg.to_string(), |acc, tag| tag.resolve(&acc))
}

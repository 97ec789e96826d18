//! Splitting a message body into its own text and the quoted footer.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConfigError;

/// Matches quoted-reply headers like `-----Original Message-----` or
/// `_____ Ursprüngliche Nachricht _____` at the start of a line.
pub const DEFAULT_SEPARATOR_PATTERN: &str = r"(?mi)^[ \t>]*(?:-{5,}|_{5,})[ \t]*(?:original[ \t]*message|urspr(?:ü|ue)ngliche[ \t]*nachricht)[ \t]*(?:-{5,}|_{5,})?";

static DEFAULT_SPLITTER: LazyLock<ContentSplitter> = LazyLock::new(|| ContentSplitter {
    separator: Regex::new(DEFAULT_SEPARATOR_PATTERN)
        .expect("default separator pattern should compile"),
});

/// Splits text at the first separator match.
#[derive(Clone, Debug)]
pub struct ContentSplitter {
    separator: Regex,
}

impl ContentSplitter {
    /// Compiles a splitter from a regular expression.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let separator = Regex::new(pattern).map_err(|source| ConfigError::InvalidSeparator {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { separator })
    }

    /// Returns `(primary, footer)`.
    ///
    /// The footer starts with the separator itself. Without a match the whole
    /// text is primary and the footer is empty.
    pub fn split<'a>(&self, text: &'a str) -> (&'a str, &'a str) {
        match self.separator.find(text) {
            Some(found) => text.split_at(found.start()),
            None => (text, ""),
        }
    }
}

impl Default for ContentSplitter {
    fn default() -> Self {
        DEFAULT_SPLITTER.clone()
    }
}

/// Splits `text` with the default quoted-reply separator.
pub fn split_text_by_separator(text: &str) -> (&str, &str) {
    DEFAULT_SPLITTER.split(text)
}

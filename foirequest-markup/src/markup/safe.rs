//! Pre-escaped markup.

use std::fmt;

/// Markup that has already been escaped and can be embedded as-is.
///
/// Every renderer in this crate returns `SafeHtml`. Template layers must emit
/// the inner string verbatim; escaping it again would show entities such as
/// `&amp;lt;` to the reader.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Wraps markup the caller guarantees to be safe.
    #[must_use]
    pub fn from_trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Escapes plain text and wraps the result.
    #[must_use]
    pub fn escape_text(text: &str) -> Self {
        Self(super::escape(text))
    }

    /// Returns an empty fragment.
    #[must_use]
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for SafeHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SafeHtml> for String {
    fn from(html: SafeHtml) -> Self {
        html.0
    }
}

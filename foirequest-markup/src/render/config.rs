//! Renderer configuration.

use std::borrow::Cow;

use crate::diff::MarkerConfig;
use crate::markup::{DEFAULT_SEPARATOR_PATTERN, DEFAULT_URL_LIMIT};

/// Tooltip shown on spans that only privileged viewers can see.
pub const DEFAULT_PRIVILEGED_TITLE: &str = "Only visible to you";

/// Settings for [`super::MessageRenderer`].
///
/// The defaults reproduce the markup the message templates expect. With the
/// `serde` feature the struct can be read from application config; missing
/// keys fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RenderConfig {
    /// Maximum visible length of link texts.
    url_limit: usize,
    /// Tooltip on spans shown to privileged viewers. Plain text, escaped on use.
    privileged_title: Cow<'static, str>,
    /// Regular expression that starts the quoted footer of a message.
    separator_pattern: Cow<'static, str>,
    /// Marker tags, used as-is for public viewers.
    marker: MarkerConfig,
}

impl RenderConfig {
    #[must_use]
    pub fn with_url_limit(mut self, url_limit: usize) -> Self {
        self.url_limit = url_limit;
        self
    }

    /// Uses another tooltip, e.g. a translated one.
    #[must_use]
    pub fn with_privileged_title<T>(mut self, title: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        self.privileged_title = title.into();
        self
    }

    #[must_use]
    pub fn with_separator_pattern<P>(mut self, pattern: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        self.separator_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerConfig) -> Self {
        self.marker = marker;
        self
    }

    pub fn url_limit(&self) -> usize {
        self.url_limit
    }

    pub fn privileged_title(&self) -> &str {
        &self.privileged_title
    }

    pub fn separator_pattern(&self) -> &str {
        &self.separator_pattern
    }

    pub fn marker(&self) -> &MarkerConfig {
        &self.marker
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            url_limit: DEFAULT_URL_LIMIT,
            privileged_title: Cow::Borrowed(DEFAULT_PRIVILEGED_TITLE),
            separator_pattern: Cow::Borrowed(DEFAULT_SEPARATOR_PATTERN),
            marker: MarkerConfig::default(),
        }
    }
}

//! The configured renderer and the entrypoints that use the defaults.

use std::sync::LazyLock;

use super::config::RenderConfig;
use super::message::RenderedMessage;
use crate::diff::MarkerConfig;
use crate::error::ConfigError;
use crate::markup::{escape, ContentSplitter, SafeHtml};
use crate::model::FoiMessage;
use crate::services::Permissions;

static DEFAULT_RENDERER: LazyLock<MessageRenderer> = LazyLock::new(MessageRenderer::default);

/// Renders message bodies for the request pages.
///
/// Construct it once at start-up and share it; rendering takes `&self` and
/// keeps no state between calls.
#[derive(Clone, Debug)]
pub struct MessageRenderer {
    pub(super) url_limit: usize,
    pub(super) splitter: ContentSplitter,
    /// Spans shown to viewers without elevated access.
    pub(super) public_marker: MarkerConfig,
    /// Spans shown to the requester and other privileged viewers.
    pub(super) privileged_marker: MarkerConfig,
}

impl MessageRenderer {
    /// Validates the configuration and compiles the footer separator.
    pub fn new(config: &RenderConfig) -> Result<Self, ConfigError> {
        config.marker().validate()?;
        let splitter = ContentSplitter::new(config.separator_pattern())?;
        Ok(Self::from_parts(config, splitter))
    }

    fn from_parts(config: &RenderConfig, splitter: ContentSplitter) -> Self {
        let public_marker = config.marker().clone();
        let privileged_marker = public_marker.clone().with_attrs(format!(
            " class=\"redacted redacted-hover\" data-toggle=\"tooltip\" title=\"{}\"",
            escape(config.privileged_title())
        ));
        Self {
            url_limit: config.url_limit(),
            splitter,
            public_marker,
            privileged_marker,
        }
    }
}

impl Default for MessageRenderer {
    fn default() -> Self {
        Self::from_parts(&RenderConfig::default(), ContentSplitter::default())
    }
}

/// Highlights the request description in a message with the default settings.
///
/// See [`MessageRenderer::highlight_request`].
#[must_use]
pub fn highlight_request<M>(message: &M) -> SafeHtml
where
    M: FoiMessage + ?Sized,
{
    DEFAULT_RENDERER.highlight_request(message)
}

/// Renders the redaction view of a message with the default settings.
///
/// See [`MessageRenderer::redact_message`].
#[must_use]
pub fn redact_message<M, V, P>(message: &M, viewer: &V, permissions: &P) -> SafeHtml
where
    M: FoiMessage + ?Sized,
    V: ?Sized,
    P: Permissions<M::Request, V> + ?Sized,
{
    DEFAULT_RENDERER.redact_message(message, viewer, permissions)
}

/// Like [`redact_message`], also returning what was marked.
#[must_use]
pub fn render_redacted_message<M, V, P>(message: &M, viewer: &V, permissions: &P) -> RenderedMessage
where
    M: FoiMessage + ?Sized,
    V: ?Sized,
    P: Permissions<M::Request, V> + ?Sized,
{
    DEFAULT_RENDERER.render_redacted_message(message, viewer, permissions)
}

#[cfg(test)]
mod tests {
    use super::MessageRenderer;
    use crate::diff::MarkerConfig;
    use crate::error::ConfigError;
    use crate::render::RenderConfig;

    #[test]
    fn privileged_title_is_escaped_into_attrs() {
        let config = RenderConfig::default().with_privileged_title("Nur \"Sie\"");
        let renderer = MessageRenderer::new(&config).unwrap();
        assert_eq!(
            renderer.privileged_marker.attrs(),
            " class=\"redacted redacted-hover\" data-toggle=\"tooltip\" title=\"Nur &quot;Sie&quot;\""
        );
        assert_eq!(renderer.public_marker.attrs(), " class=\"redacted\"");
    }

    #[test]
    fn invalid_separator_is_rejected() {
        let config = RenderConfig::default().with_separator_pattern("[");
        assert!(matches!(
            MessageRenderer::new(&config),
            Err(ConfigError::InvalidSeparator { .. })
        ));
    }

    #[test]
    fn marker_without_placeholder_is_rejected() {
        let config =
            RenderConfig::default().with_marker(MarkerConfig::default().with_start_tag("<b>"));
        assert!(matches!(
            MessageRenderer::new(&config),
            Err(ConfigError::MissingAttrsPlaceholder { .. })
        ));
    }
}

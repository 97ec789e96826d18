//! The redaction view of a message.
//!
//! Privileged viewers see the real content with the parts hidden from the
//! public marked and labelled "only visible to you". Everyone else sees the
//! public content with the redacted places marked. The public rendering is
//! built from the redacted text only, so no character of the real content
//! ends up in it, not even inside equal runs.

use super::MessageRenderer;
use crate::diff::{mark_differences_with_stats, MarkStats, MarkerConfig};
use crate::markup::{normalize_newlines, urlize_trunc, SafeHtml};
use crate::model::FoiMessage;
use crate::services::Permissions;

/// A rendered message together with what was marked in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedMessage {
    pub html: SafeHtml,
    pub summary: RenderSummary,
}

/// What happened while rendering a message. Holds no message text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSummary {
    pub message_id: u64,
    /// Whether the real content was rendered.
    pub privileged: bool,
    pub has_footer: bool,
    pub primary: MarkStats,
    pub footer: MarkStats,
}

impl MessageRenderer {
    /// Renders a message for `viewer`, marking what differs between its real
    /// and its public content.
    ///
    /// The viewer is privileged if they may write the request or read it
    /// through an anonymous access link. A non-empty quoted footer is placed
    /// in a collapsed block keyed by the message id.
    #[must_use]
    pub fn redact_message<M, V, P>(&self, message: &M, viewer: &V, permissions: &P) -> SafeHtml
    where
        M: FoiMessage + ?Sized,
        V: ?Sized,
        P: Permissions<M::Request, V> + ?Sized,
    {
        self.render_redacted_message(message, viewer, permissions).html
    }

    /// Like [`MessageRenderer::redact_message`], also returning a summary.
    #[must_use]
    pub fn render_redacted_message<M, V, P>(
        &self,
        message: &M,
        viewer: &V,
        permissions: &P,
    ) -> RenderedMessage
    where
        M: FoiMessage + ?Sized,
        V: ?Sized,
        P: Permissions<M::Request, V> + ?Sized,
    {
        let request = message.request();
        let privileged = permissions.can_write(request, viewer)
            || permissions.can_read_anonymous(request, viewer);
        self.render_with_privilege(message, privileged)
    }

    /// Renders a message for a viewer whose privilege is already known.
    #[must_use]
    pub fn render_with_privilege<M>(&self, message: &M, privileged: bool) -> RenderedMessage
    where
        M: FoiMessage + ?Sized,
    {
        let real_content = normalize_newlines(message.real_content());
        let redacted_content = normalize_newlines(message.content());

        let (real_primary, real_footer) = self.splitter.split(&real_content);
        let (redacted_primary, redacted_footer) = self.splitter.split(&redacted_content);

        let ((primary, primary_stats), (footer, footer_stats)) = if privileged {
            (
                self.mark(real_primary, redacted_primary, &self.privileged_marker),
                self.mark(real_footer, redacted_footer, &self.privileged_marker),
            )
        } else {
            (
                self.mark(redacted_primary, real_primary, &self.public_marker),
                self.mark(redacted_footer, real_footer, &self.public_marker),
            )
        };

        let has_footer = !footer.is_empty();
        let html = if has_footer {
            let id = message.id();
            SafeHtml::from_trusted(format!(
                "{primary}<a href=\"#message-footer-{id}\" data-toggle=\"collapse\" \
                 aria-expanded=\"false\" aria-controls=\"message-footer-{id}\">…</a>\
                 <div id=\"message-footer-{id}\" class=\"collapse\">{footer}</div>"
            ))
        } else {
            primary
        };

        RenderedMessage {
            html,
            summary: RenderSummary {
                message_id: message.id(),
                privileged,
                has_footer,
                primary: primary_stats,
                footer: footer_stats,
            },
        }
    }

    fn mark(&self, content_a: &str, content_b: &str, marker: &MarkerConfig) -> (SafeHtml, MarkStats) {
        let marked = mark_differences_with_stats(content_a, content_b, marker);
        // the marked text is escaped already
        let linked = urlize_trunc(marked.html.as_str(), self.url_limit);
        (linked, marked.stats)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{FoiMessage, FoiRequest};
    use crate::render::MessageRenderer;
    use crate::services::Permissions;

    struct Request;

    impl FoiRequest for Request {
        fn id(&self) -> u64 {
            3
        }

        fn same_as_id(&self) -> Option<u64> {
            None
        }

        fn description(&self) -> &str {
            ""
        }
    }

    struct Message {
        real: &'static str,
        public: &'static str,
    }

    impl FoiMessage for Message {
        type Request = Request;

        fn id(&self) -> u64 {
            42
        }

        fn content(&self) -> &str {
            self.public
        }

        fn real_content(&self) -> &str {
            self.real
        }

        fn request(&self) -> &Request {
            &Request
        }
    }

    /// Grants exactly the listed permissions to every viewer.
    struct Grants {
        write: bool,
        anonymous: bool,
    }

    impl Permissions<Request, str> for Grants {
        fn can_read(&self, _request: &Request, _viewer: &str) -> bool {
            true
        }

        fn can_write(&self, _request: &Request, _viewer: &str) -> bool {
            self.write
        }

        fn can_read_anonymous(&self, _request: &Request, _viewer: &str) -> bool {
            self.anonymous
        }
    }

    const PUBLIC: Grants = Grants {
        write: false,
        anonymous: false,
    };

    const OWNER: Grants = Grants {
        write: true,
        anonymous: false,
    };

    const REAL: &str = "My name is Alice Smith and I live here.";
    const REDACTED: &str = "My name is <<name>> and I live here.";

    #[test]
    fn public_viewer_sees_marked_redacted_content() {
        let message = Message {
            real: REAL,
            public: REDACTED,
        };
        let html = MessageRenderer::default().redact_message(&message, "anon", &PUBLIC);
        assert_eq!(
            html.as_str(),
            "My name is <span class=\"redacted\"> &lt;&lt;name&gt;&gt; </span> and I live here."
        );
        assert!(!html.as_str().contains("Alice"));
    }

    #[test]
    fn privileged_viewer_sees_marked_real_content() {
        let message = Message {
            real: REAL,
            public: REDACTED,
        };
        let html = MessageRenderer::default().redact_message(&message, "owner", &OWNER);
        assert_eq!(
            html.as_str(),
            "My name is <span class=\"redacted redacted-hover\" data-toggle=\"tooltip\" \
             title=\"Only visible to you\"> Alice Smith </span> and I live here."
        );
    }

    #[test]
    fn anonymous_read_access_is_privileged() {
        let message = Message {
            real: REAL,
            public: REDACTED,
        };
        let grants = Grants {
            write: false,
            anonymous: true,
        };
        let rendered = MessageRenderer::default().render_redacted_message(&message, "token", &grants);
        assert!(rendered.summary.privileged);
        assert!(rendered.html.as_str().contains("Alice Smith"));
    }

    #[test]
    fn footer_is_collapsed_under_message_id() {
        let message = Message {
            real: "Thanks Bob\r\n-----Original Message-----\r\nFrom: bob@example.org",
            public: "Thanks Bob\r\n-----Original Message-----\r\nFrom: <<email>>",
        };
        let rendered = MessageRenderer::default().render_with_privilege(&message, false);
        let html = rendered.html.as_str();
        assert!(html.starts_with("Thanks Bob\n<a href=\"#message-footer-42\""));
        assert!(html.contains("<div id=\"message-footer-42\" class=\"collapse\">-----Original Message-----\n"));
        assert!(html.ends_with("</div>"));
        assert!(rendered.summary.has_footer);
        assert_eq!(rendered.summary.footer.spans, 1);
        assert_eq!(rendered.summary.primary.spans, 0);
    }

    #[test]
    fn no_footer_means_no_wrapper() {
        let message = Message {
            real: "Plain body",
            public: "Plain body",
        };
        let rendered = MessageRenderer::default().render_with_privilege(&message, true);
        assert_eq!(rendered.html.as_str(), "Plain body");
        assert!(!rendered.summary.has_footer);
        assert!(!rendered.html.as_str().contains("collapse"));
    }

    #[test]
    fn links_are_added_without_double_escaping() {
        let message = Message {
            real: "See https://example.org/?a=1&b=2 & more",
            public: "See https://example.org/?a=1&b=2 & more",
        };
        let html = MessageRenderer::default().render_with_privilege(&message, false).html;
        assert_eq!(
            html.as_str(),
            "See <a href=\"https://example.org/?a=1&amp;b=2\" rel=\"nofollow\">\
             https://example.org/?a=1&amp;b=2</a> &amp; more"
        );
    }
}

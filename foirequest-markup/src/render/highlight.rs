//! Highlighting the request text inside the letter that carried it.

use super::MessageRenderer;
use crate::markup::{escape, normalize_newlines, unescape, urlize_trunc, SafeHtml};
use crate::model::{FoiMessage, FoiRequest};

impl MessageRenderer {
    /// Splits a message around the first occurrence of its request's
    /// description.
    ///
    /// On a match the output is three blocks: the text before the
    /// description, the description itself with links, and the rest of the
    /// letter in a collapsed block:
    ///
    /// ```text
    /// <div>…</div><div class="highlight">…</div><div class="collapse" id="letter_end">…</div>
    /// ```
    ///
    /// If the description does not occur literally, the whole content is
    /// returned escaped and without any blocks.
    #[must_use]
    pub fn highlight_request<M>(&self, message: &M) -> SafeHtml
    where
        M: FoiMessage + ?Sized,
    {
        let content = normalize_newlines(message.content());
        let content = unescape(&content);
        let description = normalize_newlines(message.request().description());

        let Some(index) = content.find(&*description) else {
            return SafeHtml::escape_text(&content);
        };
        let offset = index + description.len();

        let mut html = String::with_capacity(content.len() + 96);
        html.push_str("<div>");
        html.push_str(&escape(&content[..index]));
        html.push_str("</div><div class=\"highlight\">");
        html.push_str(urlize_trunc(&escape(&description), self.url_limit).as_str());
        html.push_str("</div><div class=\"collapse\" id=\"letter_end\">");
        html.push_str(&escape(&content[offset..]));
        html.push_str("</div>");
        SafeHtml::from_trusted(html)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{FoiMessage, FoiRequest};
    use crate::render::MessageRenderer;

    struct Request(&'static str);

    impl FoiRequest for Request {
        fn id(&self) -> u64 {
            1
        }

        fn same_as_id(&self) -> Option<u64> {
            None
        }

        fn description(&self) -> &str {
            self.0
        }
    }

    struct Message {
        content: &'static str,
        request: Request,
    }

    impl FoiMessage for Message {
        type Request = Request;

        fn id(&self) -> u64 {
            7
        }

        fn content(&self) -> &str {
            self.content
        }

        fn real_content(&self) -> &str {
            self.content
        }

        fn request(&self) -> &Request {
            &self.request
        }
    }

    fn highlight(content: &'static str, description: &'static str) -> String {
        let message = Message {
            content,
            request: Request(description),
        };
        MessageRenderer::default()
            .highlight_request(&message)
            .into_string()
    }

    #[test]
    fn match_produces_three_blocks() {
        assert_eq!(
            highlight("Dear Sir,\nplease send me X.\nRegards", "please send me X."),
            "<div>Dear Sir,\n</div><div class=\"highlight\">please send me X.</div>\
             <div class=\"collapse\" id=\"letter_end\">\nRegards</div>"
        );
    }

    #[test]
    fn miss_returns_escaped_content() {
        let html = highlight("A & B", "not there");
        assert_eq!(html, "A &amp; B");
        assert!(!html.contains("<div"));
    }

    #[test]
    fn line_endings_are_normalized_on_both_sides() {
        let html = highlight("Hi\r\nfirst\r\nsecond\r\nbye", "first\r\nsecond");
        assert!(html.contains("<div class=\"highlight\">first\nsecond</div>"));
    }

    #[test]
    fn entities_in_content_are_decoded_before_matching() {
        let html = highlight("Betreff: Stra&szlig;enbau", "Straßenbau");
        assert_eq!(
            html,
            "<div>Betreff: </div><div class=\"highlight\">Straßenbau</div>\
             <div class=\"collapse\" id=\"letter_end\"></div>"
        );
    }

    #[test]
    fn links_in_description_are_truncated() {
        let html = highlight(
            "See https://example.org/documents/2019/annual-report-final.pdf now",
            "https://example.org/documents/2019/annual-report-final.pdf",
        );
        assert!(html.contains(
            "<div class=\"highlight\"><a href=\"https://example.org/documents/2019/annual-report-final.pdf\" \
             rel=\"nofollow\">https://example.org/documents/2019/annu…</a></div>"
        ));
    }

    #[test]
    fn markup_in_content_is_escaped() {
        let html = highlight("<b>x</b> request <i>", "request");
        assert!(html.starts_with("<div>&lt;b&gt;x&lt;/b&gt; </div>"));
        assert!(html.ends_with("id=\"letter_end\"> &lt;i&gt;</div>"));
    }
}

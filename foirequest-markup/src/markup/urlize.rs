//! Link-ification of already escaped text.
//!
//! The input is markup: tags are copied through untouched and only the text
//! between them is scanned. URLs are decoded before their ends are trimmed
//! and escaped exactly once on output.

use std::sync::LazyLock;

use regex::Regex;

use super::{escape, unescape, SafeHtml};

/// Visible length of link texts used by the message renderers.
pub const DEFAULT_URL_LIMIT: usize = 40;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern should compile"));

static LINKABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:\bhttps?://|\bwww\.)[^\s<>"]+|[\w.+-]+@[\w-]+(?:\.[\w-]+)+"#)
        .expect("linkable pattern should compile")
});

/// Escaped entities that end a URL. `&amp;` is not among them, it is part
/// of query strings.
const CLOSING_ENTITIES: [&str; 4] = ["&lt;", "&gt;", "&quot;", "&#x27;"];

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ':', ';', '!', '?'];

/// Turns URLs and e-mail addresses in escaped markup into links.
///
/// Link texts longer than `limit` characters are shortened to `limit - 1`
/// characters followed by `…`. Links are marked `rel="nofollow"`.
#[must_use]
pub fn urlize_trunc(html: &str, limit: usize) -> SafeHtml {
    let mut out = String::with_capacity(html.len());
    let mut last = 0;
    for tag in TAG.find_iter(html) {
        urlize_text(&html[last..tag.start()], limit, &mut out);
        out.push_str(tag.as_str());
        last = tag.end();
    }
    urlize_text(&html[last..], limit, &mut out);
    SafeHtml::from_trusted(out)
}

fn urlize_text(text: &str, limit: usize, out: &mut String) {
    let mut last = 0;
    for found in LINKABLE.find_iter(text) {
        let candidate = found.as_str();
        let (escaped_url, closing) = candidate.split_at(closing_entity_start(candidate));
        // trimming works on the raw text so that entity semicolons stay intact
        let raw = unescape(escaped_url);
        let url = trim_url_end(&raw);
        let Some(href) = href_for(url) else {
            continue;
        };
        out.push_str(&text[last..found.start()]);
        out.push_str("<a href=\"");
        out.push_str(&escape(&href));
        out.push_str("\" rel=\"nofollow\">");
        out.push_str(&escape(&truncate(url, limit)));
        out.push_str("</a>");
        out.push_str(&escape(&raw[url.len()..]));
        out.push_str(closing);
        last = found.end();
    }
    out.push_str(&text[last..]);
}

fn closing_entity_start(candidate: &str) -> usize {
    CLOSING_ENTITIES
        .iter()
        .filter_map(|entity| candidate.find(entity))
        .min()
        .unwrap_or(candidate.len())
}

fn trim_url_end(mut url: &str) -> &str {
    loop {
        let trimmed = url.trim_end_matches(TRAILING_PUNCTUATION);
        let trimmed = match trimmed.strip_suffix(')') {
            Some(rest) if trimmed.matches('(').count() < trimmed.matches(')').count() => rest,
            _ => trimmed,
        };
        if trimmed.len() == url.len() {
            return url;
        }
        url = trimmed;
    }
}

fn href_for(url: &str) -> Option<String> {
    let lower = url.to_ascii_lowercase();
    for scheme in ["http://", "https://"] {
        if lower.starts_with(scheme) {
            return (url.len() > scheme.len()).then(|| url.to_string());
        }
    }
    if lower.starts_with("www.") {
        return (url.len() > "www.".len()).then(|| format!("http://{url}"));
    }
    url.contains('@').then(|| format!("mailto:{url}"))
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(limit.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}

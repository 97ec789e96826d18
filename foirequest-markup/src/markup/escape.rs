//! Escaping, entity decoding and whitespace normalization.
//!
//! All functions are pure string transformations and operate on Unicode
//! scalar values.

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#?\w+;").expect("entity pattern should compile"));

static ONLY_SPACE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \u{00A0}]+$").expect("space line pattern should compile")
});

/// Escapes the characters that are significant in HTML text and attributes.
///
/// `&`, `<`, `>`, `"` and `'` become `&amp;`, `&lt;`, `&gt;`, `&quot;` and
/// `&#x27;`. Everything else is copied unchanged.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Decodes numeric and well-known named character references.
///
/// Unknown names and numeric references that do not denote a Unicode scalar
/// value are left untouched.
pub fn unescape(text: &str) -> Cow<'_, str> {
    ENTITY.replace_all(text, |caps: &Captures<'_>| {
        let entity = &caps[0];
        decode_entity(entity).map_or_else(|| entity.to_string(), String::from)
    })
}

fn decode_entity(entity: &str) -> Option<char> {
    let body = &entity[1..entity.len() - 1];
    if let Some(number) = body.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }
    named_entity(body)
}

fn named_entity(name: &str) -> Option<char> {
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{00A0}',
        "auml" => 'ä',
        "ouml" => 'ö',
        "uuml" => 'ü',
        "Auml" => 'Ä',
        "Ouml" => 'Ö',
        "Uuml" => 'Ü',
        "szlig" => 'ß',
        "eacute" => 'é',
        "egrave" => 'è',
        "Eacute" => 'É',
        "agrave" => 'à',
        "aacute" => 'á',
        "ccedil" => 'ç',
        "euro" => '€',
        "pound" => '£',
        "sect" => '§',
        "copy" => '©',
        "reg" => '®',
        "deg" => '°',
        "para" => '¶',
        "middot" => '·',
        "laquo" => '«',
        "raquo" => '»',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "sbquo" => '\u{201A}',
        "ldquo" => '\u{201C}',
        "rdquo" => '\u{201D}',
        "bdquo" => '\u{201E}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "bull" => '\u{2022}',
        "shy" => '\u{00AD}',
        _ => return None,
    };
    Some(ch)
}

/// Converts `\r\n` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Empties lines that consist only of spaces and no-break spaces.
///
/// The line breaks themselves are kept, so the number of lines is unchanged.
pub fn remove_space_lines(text: &str) -> Cow<'_, str> {
    ONLY_SPACE_LINE.replace_all(text, "")
}

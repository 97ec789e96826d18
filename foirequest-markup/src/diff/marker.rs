//! Marking the spans in which two variants of a text differ.
//!
//! The marker renders `content_a` and wraps every region that is not part of
//! a long enough equal run in a marker span. Equal runs of `min_part_len`
//! characters or fewer do not end a span, so scattered one or two character
//! matches inside a changed region do not split it into many small spans.
//!
//! A span that only ever received whitespace is removed again together with
//! that whitespace.

use std::borrow::Cow;

use super::matcher::{OpTag, SequenceMatcher};
use crate::error::ConfigError;
use crate::markup::{escape, remove_space_lines, SafeHtml};

/// Default opening tag template; `{attrs}` is replaced by the attributes.
pub const DEFAULT_START_TAG: &str = "<span{attrs}> ";
/// Default closing tag.
pub const DEFAULT_END_TAG: &str = " </span>";
/// Default attributes of the opening tag.
pub const DEFAULT_ATTRS: &str = " class=\"redacted\"";
/// Equal runs up to this many characters do not close an open span.
pub const DEFAULT_MIN_PART_LEN: usize = 3;

const ATTRS_PLACEHOLDER: &str = "{attrs}";

/// Tags and thresholds used by [`mark_differences`].
///
/// Tags are emitted verbatim; attribute values must already be escaped.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MarkerConfig {
    /// Opening tag template containing `{attrs}`.
    start_tag: Cow<'static, str>,
    /// Closing tag.
    end_tag: Cow<'static, str>,
    /// Substituted for `{attrs}` in the opening tag.
    attrs: Cow<'static, str>,
    /// Equal runs up to this length do not close an open span.
    min_part_len: usize,
}

impl MarkerConfig {
    /// Uses other attributes for the opening tag.
    #[must_use]
    pub fn with_attrs<A>(mut self, attrs: A) -> Self
    where
        A: Into<Cow<'static, str>>,
    {
        self.attrs = attrs.into();
        self
    }

    /// Uses another opening tag template.
    #[must_use]
    pub fn with_start_tag<T>(mut self, start_tag: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        self.start_tag = start_tag.into();
        self
    }

    /// Uses another closing tag.
    #[must_use]
    pub fn with_end_tag<T>(mut self, end_tag: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        self.end_tag = end_tag.into();
        self
    }

    /// Changes the equal-run threshold.
    #[must_use]
    pub fn with_min_part_len(mut self, min_part_len: usize) -> Self {
        self.min_part_len = min_part_len;
        self
    }

    pub fn attrs(&self) -> &str {
        &self.attrs
    }

    pub fn min_part_len(&self) -> usize {
        self.min_part_len
    }

    /// The opening tag with the attributes filled in.
    pub fn start_tag(&self) -> String {
        self.start_tag.replace(ATTRS_PLACEHOLDER, &self.attrs)
    }

    pub fn end_tag(&self) -> &str {
        &self.end_tag
    }

    /// Rejects an opening tag template without `{attrs}`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_tag.contains(ATTRS_PLACEHOLDER) {
            Ok(())
        } else {
            Err(ConfigError::MissingAttrsPlaceholder {
                template: self.start_tag.to_string(),
            })
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            start_tag: Cow::Borrowed(DEFAULT_START_TAG),
            end_tag: Cow::Borrowed(DEFAULT_END_TAG),
            attrs: Cow::Borrowed(DEFAULT_ATTRS),
            min_part_len: DEFAULT_MIN_PART_LEN,
        }
    }
}

/// Counters collected while marking. They never contain message text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkStats {
    /// Spans emitted.
    pub spans: usize,
    /// Spans dropped because they held only whitespace.
    pub discarded_spans: usize,
    /// Characters of `content_a` inside emitted spans.
    pub marked_chars: usize,
}

/// Output of [`mark_differences_with_stats`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkedText {
    pub html: SafeHtml,
    pub stats: MarkStats,
}

#[derive(Clone, Copy, Debug)]
enum SpanState {
    Idle,
    Open {
        /// Output length before the opening tag.
        rollback: usize,
        has_text: bool,
        marked_chars: usize,
    },
}

struct SpanWriter {
    out: String,
    state: SpanState,
    start_tag: String,
    end_tag: String,
    stats: MarkStats,
}

impl SpanWriter {
    fn new(config: &MarkerConfig, capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            state: SpanState::Idle,
            start_tag: config.start_tag(),
            end_tag: config.end_tag().to_string(),
            stats: MarkStats::default(),
        }
    }

    fn is_open(&self) -> bool {
        matches!(self.state, SpanState::Open { .. })
    }

    fn open(&mut self) {
        self.state = SpanState::Open {
            rollback: self.out.len(),
            has_text: false,
            marked_chars: 0,
        };
        self.out.push_str(&self.start_tag);
    }

    fn append(&mut self, text: &str) {
        let escaped = escape(&remove_space_lines(text));
        if let SpanState::Open {
            has_text,
            marked_chars,
            ..
        } = &mut self.state
        {
            *has_text |= !escaped.trim().is_empty();
            *marked_chars += text.chars().count();
        }
        self.out.push_str(&escaped);
    }

    /// Closes an open span, or removes it if it holds only whitespace.
    fn close(&mut self) {
        if let SpanState::Open {
            rollback,
            has_text,
            marked_chars,
        } = self.state
        {
            if has_text {
                self.out.push_str(&self.end_tag);
                self.stats.spans += 1;
                self.stats.marked_chars += marked_chars;
            } else {
                self.out.truncate(rollback);
                self.stats.discarded_spans += 1;
            }
        }
        self.state = SpanState::Idle;
    }

    fn finish(mut self) -> MarkedText {
        self.close();
        MarkedText {
            html: SafeHtml::from_trusted(self.out),
            stats: self.stats,
        }
    }
}

/// Renders `content_a` with the regions that differ from `content_b` wrapped
/// in marker spans.
///
/// The result is escaped markup and must not be escaped again.
#[must_use]
pub fn mark_differences(content_a: &str, content_b: &str, config: &MarkerConfig) -> SafeHtml {
    mark_differences_with_stats(content_a, content_b, config).html
}

/// Like [`mark_differences`], also reporting how many spans were emitted.
#[must_use]
pub fn mark_differences_with_stats(
    content_a: &str,
    content_b: &str,
    config: &MarkerConfig,
) -> MarkedText {
    let a: Vec<char> = content_a.chars().collect();
    let b: Vec<char> = content_b.chars().collect();
    // byte offset of every char index, plus the end
    let bounds: Vec<usize> = content_a
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(content_a.len()))
        .collect();

    let mut writer = SpanWriter::new(config, content_a.len());
    for opcode in SequenceMatcher::new(&a, &b).opcodes() {
        let differs = opcode.tag != OpTag::Equal;
        let long_enough = opcode.a_len() > config.min_part_len();
        if !differs && long_enough && writer.is_open() {
            writer.close();
        }
        if differs && !writer.is_open() {
            writer.open();
        }
        writer.append(&content_a[bounds[opcode.i1]..bounds[opcode.i2]]);
    }
    writer.finish()
}

//! Text and HTML primitives shared by the renderers.
//!
//! - **`safe`**: the [`SafeHtml`] newtype for markup that must not be escaped again
//! - **`escape`**: escaping, entity decoding and whitespace normalization
//! - **`split`**: splitting a message into its primary part and quoted footer
//! - **`urlize`**: turning URLs and e-mail addresses in escaped text into links

mod escape;
mod safe;
mod split;
mod urlize;

pub use escape::{escape, normalize_newlines, remove_space_lines, unescape};
pub use safe::SafeHtml;
pub use split::{split_text_by_separator, ContentSplitter, DEFAULT_SEPARATOR_PATTERN};
pub use urlize::{urlize_trunc, DEFAULT_URL_LIMIT};

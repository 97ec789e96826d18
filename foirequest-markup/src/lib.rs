//! Markup helpers for freedom of information request pages.
//!
//! This crate renders the messages of a request:
//! - **Redaction view**: the real and the public version of a message are
//!   aligned and the places where they differ are wrapped in marker spans.
//!   Privileged viewers see the real text with what the public cannot see
//!   marked; everyone else sees the public text with the redactions marked.
//! - **Letter highlighting**: the request description is picked out of the
//!   letter that carried it.
//! - **Template helpers**: permission filters, the alternative address and the
//!   same-request lookup, registered explicitly at start-up.
//!
//! Requests, messages, permissions and lookups belong to the application and
//! are injected through the traits in [`model`] and [`services`]. The crate
//! performs no I/O and keeps no state between calls.
//!
//! Every renderer returns [`SafeHtml`]: escaped markup that must be emitted
//! verbatim.
//!
//! ```rust
//! use foirequest_markup::{mark_differences, MarkerConfig};
//!
//! let html = mark_differences(
//!     "Name: Alice Smith, thanks",
//!     "Name: XXXXXXXXXXX, thanks",
//!     &MarkerConfig::default(),
//! );
//! assert_eq!(
//!     html.as_str(),
//!     "Name: <span class=\"redacted\"> Alice Smith </span>, thanks"
//! );
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use foirequest_markup_derive::{FoiMessage, FoiRequest};

#[allow(unused_extern_crates)]
extern crate self as foirequest_markup;

// Module declarations
mod diff;
mod error;
mod markup;
pub mod model;
mod render;
pub mod services;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tags")]
pub mod tags;

// Re-exports
pub use diff::{
    mark_differences, mark_differences_with_stats, MarkStats, MarkedText, MarkerConfig, Match,
    OpTag, Opcode, SequenceMatcher, DEFAULT_ATTRS, DEFAULT_END_TAG, DEFAULT_MIN_PART_LEN,
    DEFAULT_START_TAG,
};
pub use error::{ConfigError, RegistrationError};
pub use markup::{
    escape, normalize_newlines, remove_space_lines, split_text_by_separator, unescape,
    urlize_trunc, ContentSplitter, SafeHtml, DEFAULT_SEPARATOR_PATTERN, DEFAULT_URL_LIMIT,
};
pub use model::{FoiMessage, FoiRequest};
pub use render::{
    highlight_request, redact_message, render_redacted_message, MessageRenderer, RenderConfig,
    RenderSummary, RenderedMessage, DEFAULT_PRIVILEGED_TITLE,
};
pub use services::{AlternativeMail, Permissions, SameRequestLookup};

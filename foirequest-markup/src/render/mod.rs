//! Message renderers for the request pages.
//!
//! - **`config`**: [`RenderConfig`], the settings with their historic defaults
//! - **`renderer`**: [`MessageRenderer`] and entrypoints using the defaults
//! - **`highlight`**: the request description inside the letter
//! - **`message`**: the redaction view of a message

mod config;
mod highlight;
mod message;
mod renderer;

pub use config::{RenderConfig, DEFAULT_PRIVILEGED_TITLE};
pub use message::{RenderSummary, RenderedMessage};
pub use renderer::{highlight_request, redact_message, render_redacted_message, MessageRenderer};

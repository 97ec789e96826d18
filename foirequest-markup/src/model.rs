//! Accessors the renderers need from the application's models.
//!
//! The crate never loads or stores requests and messages itself. Implement
//! these traits for your own types, by hand or with
//! `#[derive(FoiRequest)]` / `#[derive(FoiMessage)]`:
//!
//! ```rust
//! use foirequest_markup::{FoiMessage, FoiRequest};
//!
//! #[derive(Debug, FoiRequest)]
//! struct Request {
//!     #[foirequest(id)]
//!     id: u64,
//!     #[foirequest(same_as)]
//!     same_as: Option<u64>,
//!     #[foirequest(description)]
//!     description: String,
//! }
//!
//! #[derive(FoiMessage)]
//! struct Message {
//!     #[message(id)]
//!     id: u64,
//!     #[message(content)]
//!     redacted: String,
//!     #[message(real_content)]
//!     plaintext: String,
//!     #[message(request)]
//!     request: Request,
//! }
//! ```

/// A freedom of information request.
pub trait FoiRequest {
    fn id(&self) -> u64;

    /// Id of the request this one duplicates, if any.
    fn same_as_id(&self) -> Option<u64>;

    /// The text the requester asked for.
    fn description(&self) -> &str;
}

/// A message sent or received as part of a request.
pub trait FoiMessage {
    type Request: FoiRequest;

    fn id(&self) -> u64;

    /// Public content with sensitive parts removed.
    fn content(&self) -> &str;

    /// Unredacted content, only to be shown to privileged viewers.
    fn real_content(&self) -> &str;

    fn request(&self) -> &Self::Request;
}

impl<T> FoiRequest for &T
where
    T: FoiRequest + ?Sized,
{
    fn id(&self) -> u64 {
        (**self).id()
    }

    fn same_as_id(&self) -> Option<u64> {
        (**self).same_as_id()
    }

    fn description(&self) -> &str {
        (**self).description()
    }
}

impl<T> FoiMessage for &T
where
    T: FoiMessage + ?Sized,
{
    type Request = T::Request;

    fn id(&self) -> u64 {
        (**self).id()
    }

    fn content(&self) -> &str {
        (**self).content()
    }

    fn real_content(&self) -> &str {
        (**self).real_content()
    }

    fn request(&self) -> &Self::Request {
        (**self).request()
    }
}

//! Services the helpers delegate to.
//!
//! Permission rules and lookups belong to the application. The helpers only
//! call them, which keeps the renderers testable without a database.

/// Permission predicates for a request and the current viewer.
pub trait Permissions<R: ?Sized, V: ?Sized> {
    fn can_read(&self, request: &R, viewer: &V) -> bool;

    fn can_write(&self, request: &R, viewer: &V) -> bool;

    /// Whether the viewer may read the request through an anonymous access
    /// token, e.g. a link shared by the requester.
    fn can_read_anonymous(&self, request: &R, viewer: &V) -> bool;
}

/// Finds requests that were filed as duplicates of another one.
pub trait SameRequestLookup<U: ?Sized> {
    type Request;

    /// Returns the first request of `owner` marked as the same as `same_as_id`.
    fn find_same_request(&self, owner: &U, same_as_id: u64) -> Option<Self::Request>;
}

/// Looks up the alternative e-mail address of a request.
pub trait AlternativeMail<R: ?Sized> {
    fn alternative_mail(&self, request: &R) -> Option<String>;
}

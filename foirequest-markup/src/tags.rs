//! Template helpers for the request pages.
//!
//! Helpers are registered explicitly during start-up instead of as a side
//! effect of loading a module:
//!
//! ```rust
//! use foirequest_markup::tags::{register_foirequest_tags, TagLibrary};
//!
//! let mut library = TagLibrary::new();
//! register_foirequest_tags(&mut library).expect("helpers are registered once");
//! assert!(library.contains("redact_message"));
//! ```
//!
//! [`FoiRequestTags`] then binds the helpers to the application's services.

use std::collections::{BTreeMap, HashMap};

use crate::error::RegistrationError;
use crate::markup::SafeHtml;
use crate::model::{FoiMessage, FoiRequest};
use crate::render::{MessageRenderer, RenderedMessage};
use crate::services::{AlternativeMail, Permissions, SameRequestLookup};

/// Boolean filters over a request and the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PermissionFilter {
    CanRead,
    CanWrite,
    CanReadAnonymous,
}

/// Helpers that render output or update the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SimpleTag {
    HighlightRequest,
    RedactMessage,
    AlternativeAddress,
    /// Takes the rendering context.
    CheckSameRequest,
}

/// A registered helper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Helper {
    Filter(PermissionFilter),
    Tag(SimpleTag),
}

const FOIREQUEST_HELPERS: [(&str, Helper); 7] = [
    (
        "can_read_foirequest",
        Helper::Filter(PermissionFilter::CanRead),
    ),
    (
        "can_write_foirequest",
        Helper::Filter(PermissionFilter::CanWrite),
    ),
    (
        "can_read_foirequest_anonymous",
        Helper::Filter(PermissionFilter::CanReadAnonymous),
    ),
    ("highlight_request", Helper::Tag(SimpleTag::HighlightRequest)),
    ("redact_message", Helper::Tag(SimpleTag::RedactMessage)),
    (
        "alternative_address",
        Helper::Tag(SimpleTag::AlternativeAddress),
    ),
    ("check_same_request", Helper::Tag(SimpleTag::CheckSameRequest)),
];

/// Names of the template helpers known to a template engine.
#[derive(Clone, Debug, Default)]
pub struct TagLibrary {
    helpers: BTreeMap<String, Helper>,
}

impl TagLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `helper` under `name`. Each name can be registered once.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        helper: Helper,
    ) -> Result<(), RegistrationError> {
        let name = name.into();
        if self.helpers.contains_key(&name) {
            return Err(RegistrationError::Duplicate(name));
        }
        self.helpers.insert(name, helper);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Helper> {
        self.helpers.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.helpers.contains_key(name)
    }

    /// Registered names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.helpers.keys().map(String::as_str)
    }
}

/// Registers the request filters and tags.
///
/// Fails without registering anything if one of the names is taken.
pub fn register_foirequest_tags(library: &mut TagLibrary) -> Result<(), RegistrationError> {
    if let Some((name, _)) = FOIREQUEST_HELPERS
        .iter()
        .find(|(name, _)| library.contains(name))
    {
        return Err(RegistrationError::Duplicate((*name).to_string()));
    }
    for (name, helper) in FOIREQUEST_HELPERS {
        library.register(name, helper)?;
    }
    Ok(())
}

/// A value stored in the rendering context by [`FoiRequestTags::check_same_request`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContextValue<R> {
    Request(R),
    /// Nothing was found. Templates test it like `False`.
    False,
}

impl<R> ContextValue<R> {
    pub fn as_request(&self) -> Option<&R> {
        match self {
            ContextValue::Request(request) => Some(request),
            ContextValue::False => None,
        }
    }

    pub fn is_truthy(&self) -> bool {
        matches!(self, ContextValue::Request(_))
    }
}

/// Variables set by helpers while a page renders.
#[derive(Clone, Debug)]
pub struct RenderContext<R> {
    vars: HashMap<String, ContextValue<R>>,
}

impl<R> RenderContext<R> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: ContextValue<R>) {
        self.vars.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&ContextValue<R>> {
        self.vars.get(name)
    }
}

impl<R> Default for RenderContext<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// The request helpers bound to the application's services.
///
/// `S` provides permissions, the same-request lookup and alternative
/// addresses; each helper only requires the service it uses.
#[derive(Clone, Debug)]
pub struct FoiRequestTags<S> {
    services: S,
    renderer: MessageRenderer,
    #[cfg(feature = "slog")]
    logger: Option<slog::Logger>,
}

impl<S> FoiRequestTags<S> {
    /// Binds the helpers to `services` using the default renderer.
    pub fn new(services: S) -> Self {
        Self::with_renderer(services, MessageRenderer::default())
    }

    pub fn with_renderer(services: S, renderer: MessageRenderer) -> Self {
        Self {
            services,
            renderer,
            #[cfg(feature = "slog")]
            logger: None,
        }
    }

    /// Logs a summary of every rendered message at debug level.
    ///
    /// Records contain ids and counters only, never message text.
    #[cfg(feature = "slog")]
    #[must_use]
    pub fn with_logger(mut self, logger: slog::Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn services(&self) -> &S {
        &self.services
    }

    pub fn renderer(&self) -> &MessageRenderer {
        &self.renderer
    }

    /// Applies the filter registered as `name`.
    ///
    /// Returns `None` if `name` is unknown or not a filter.
    pub fn filter<R, V>(
        &self,
        library: &TagLibrary,
        name: &str,
        request: &R,
        viewer: &V,
    ) -> Option<bool>
    where
        R: ?Sized,
        V: ?Sized,
        S: Permissions<R, V>,
    {
        match library.get(name)? {
            Helper::Filter(PermissionFilter::CanRead) => {
                Some(self.can_read_foirequest(request, viewer))
            }
            Helper::Filter(PermissionFilter::CanWrite) => {
                Some(self.can_write_foirequest(request, viewer))
            }
            Helper::Filter(PermissionFilter::CanReadAnonymous) => {
                Some(self.can_read_foirequest_anonymous(request, viewer))
            }
            Helper::Tag(_) => None,
        }
    }

    pub fn can_read_foirequest<R, V>(&self, request: &R, viewer: &V) -> bool
    where
        R: ?Sized,
        V: ?Sized,
        S: Permissions<R, V>,
    {
        self.services.can_read(request, viewer)
    }

    pub fn can_write_foirequest<R, V>(&self, request: &R, viewer: &V) -> bool
    where
        R: ?Sized,
        V: ?Sized,
        S: Permissions<R, V>,
    {
        self.services.can_write(request, viewer)
    }

    pub fn can_read_foirequest_anonymous<R, V>(&self, request: &R, viewer: &V) -> bool
    where
        R: ?Sized,
        V: ?Sized,
        S: Permissions<R, V>,
    {
        self.services.can_read_anonymous(request, viewer)
    }

    pub fn highlight_request<M>(&self, message: &M) -> SafeHtml
    where
        M: FoiMessage + ?Sized,
    {
        self.renderer.highlight_request(message)
    }

    pub fn redact_message<M, V>(&self, message: &M, viewer: &V) -> SafeHtml
    where
        M: FoiMessage + ?Sized,
        V: ?Sized,
        S: Permissions<M::Request, V>,
    {
        let rendered = self
            .renderer
            .render_redacted_message(message, viewer, &self.services);
        self.log_rendered(&rendered);
        rendered.html
    }

    pub fn alternative_address<R>(&self, request: &R) -> Option<String>
    where
        R: ?Sized,
        S: AlternativeMail<R>,
    {
        self.services.alternative_mail(request)
    }

    /// Stores the owner's first request filed as the same as `request` in
    /// `context[var_name]`, or [`ContextValue::False`].
    ///
    /// If `request` itself duplicates another request, the lookup uses that
    /// other request's id. Renders nothing.
    pub fn check_same_request<R, U>(
        &self,
        context: &mut RenderContext<S::Request>,
        request: &R,
        owner: &U,
        var_name: &str,
    ) -> SafeHtml
    where
        R: FoiRequest + ?Sized,
        U: ?Sized,
        S: SameRequestLookup<U>,
    {
        let same_as_id = request.same_as_id().unwrap_or_else(|| request.id());
        let value = self
            .services
            .find_same_request(owner, same_as_id)
            .map_or(ContextValue::False, ContextValue::Request);
        context.set(var_name, value);
        SafeHtml::empty()
    }

    #[cfg(feature = "slog")]
    fn log_rendered(&self, rendered: &RenderedMessage) {
        if let Some(logger) = &self.logger {
            slog::debug!(logger, "rendered message"; "summary" => rendered.summary);
        }
    }

    #[cfg(not(feature = "slog"))]
    #[allow(clippy::unused_self)]
    fn log_rendered(&self, _rendered: &RenderedMessage) {}
}

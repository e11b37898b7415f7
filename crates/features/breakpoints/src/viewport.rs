//! Host-environment boundary: the page's root style and media queries.
//!
//! A browser binding implements these over `window`/`document`; [`crate::memory`]
//! provides a headless implementation.

use std::sync::Arc;

/// Handle returned when a listener is registered, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Payload of a media query `change` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaQueryChange {
    pub matches: bool,
}

pub type ResizeListener = Arc<dyn Fn() + Send + Sync>;
pub type ChangeListener = Arc<dyn Fn(MediaQueryChange) + Send + Sync>;

/// An evaluated media query, like the browser's `MediaQueryList`.
pub trait MediaQueryList: Send + Sync + 'static {
    /// The query string this list evaluates.
    fn media(&self) -> &str;

    /// Whether the query currently matches.
    fn matches(&self) -> bool;

    fn add_change_listener(&self, listener: ChangeListener) -> ListenerId;

    /// Unknown ids are ignored.
    fn remove_change_listener(&self, id: ListenerId);
}

/// The page viewport the observer attaches to.
pub trait Viewport: Send + Sync + 'static {
    type MediaQuery: MediaQueryList;

    /// Computed value of a style property on the document's root element.
    /// `None` when the property is not set.
    fn root_style_property(&self, name: &str) -> Option<String>;

    fn add_resize_listener(&self, listener: ResizeListener) -> ListenerId;

    /// Unknown ids are ignored.
    fn remove_resize_listener(&self, id: ListenerId);

    /// Evaluates a media query, like `window.matchMedia`.
    fn match_media(&self, query: &str) -> Self::MediaQuery;
}

impl<V: Viewport> Viewport for Arc<V> {
    type MediaQuery = V::MediaQuery;

    fn root_style_property(&self, name: &str) -> Option<String> {
        (**self).root_style_property(name)
    }

    fn add_resize_listener(&self, listener: ResizeListener) -> ListenerId {
        (**self).add_resize_listener(listener)
    }

    fn remove_resize_listener(&self, id: ListenerId) {
        (**self).remove_resize_listener(id);
    }

    fn match_media(&self, query: &str) -> Self::MediaQuery {
        (**self).match_media(query)
    }
}

//! Headless viewport for tests, server-side rendering and desktop shells.
//!
//! State is set programmatically and events are dispatched synchronously on the
//! calling thread, the way a browser dispatches them on its UI thread.

use crate::viewport::{
    ChangeListener, ListenerId, MediaQueryChange, MediaQueryList, ResizeListener, Viewport,
};
use fxhash::FxHashMap;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tracing::trace;

/// Registered listeners in registration order.
struct ListenerSet<L> {
    next_id: AtomicU64,
    entries: Mutex<Vec<(ListenerId, L)>>,
}

impl<L: Clone> ListenerSet<L> {
    fn new() -> Self {
        Self { next_id: AtomicU64::new(1), entries: Mutex::new(Vec::new()) }
    }

    fn add(&self, listener: L) -> ListenerId {
        let id = ListenerId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries.lock().push((id, listener));
        id
    }

    fn remove(&self, id: ListenerId) {
        self.entries.lock().retain(|(entry, _)| *entry != id);
    }

    /// Copies the listeners so they run without the lock held.
    fn snapshot(&self) -> Vec<L> {
        self.entries.lock().iter().map(|(_, listener)| listener.clone()).collect()
    }

    fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

impl<L> fmt::Debug for ListenerSet<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet").field("len", &self.entries.lock().len()).finish()
    }
}

#[derive(Debug)]
struct MediaState {
    matches: AtomicBool,
    listeners: ListenerSet<ChangeListener>,
}

/// Media query handle returned by [`MemoryViewport::match_media`].
///
/// Handles for the same query share state.
#[derive(Debug, Clone)]
pub struct MemoryMediaQuery {
    media: Arc<str>,
    state: Arc<MediaState>,
}

impl MediaQueryList for MemoryMediaQuery {
    fn media(&self) -> &str {
        &self.media
    }

    fn matches(&self) -> bool {
        self.state.matches.load(Ordering::Acquire)
    }

    fn add_change_listener(&self, listener: ChangeListener) -> ListenerId {
        self.state.listeners.add(listener)
    }

    fn remove_change_listener(&self, id: ListenerId) {
        self.state.listeners.remove(id);
    }
}

/// In-memory [`Viewport`].
///
/// # Example
/// ```rust
/// use vantage_breakpoints::memory::MemoryViewport;
/// use vantage_breakpoints::viewport::{MediaQueryList, Viewport};
///
/// let viewport = MemoryViewport::new();
/// viewport.set_style_property("--breakpoint", "\"small\"");
/// viewport.set_media_matches("(hover: hover) and (pointer: fine)", true);
///
/// assert_eq!(viewport.root_style_property("--breakpoint").as_deref(), Some("\"small\""));
/// assert!(viewport.match_media("(hover: hover) and (pointer: fine)").matches());
/// ```
#[derive(Debug)]
pub struct MemoryViewport {
    styles: RwLock<FxHashMap<String, String>>,
    resize: ListenerSet<ResizeListener>,
    media: RwLock<FxHashMap<String, Arc<MediaState>>>,
}

impl Default for MemoryViewport {
    fn default() -> Self {
        Self {
            styles: RwLock::new(FxHashMap::default()),
            resize: ListenerSet::new(),
            media: RwLock::new(FxHashMap::default()),
        }
    }
}

impl MemoryViewport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a computed style property on the root element. Does not dispatch `resize`.
    pub fn set_style_property(&self, name: impl Into<String>, value: impl Into<String>) {
        self.styles.write().insert(name.into(), value.into());
    }

    pub fn remove_style_property(&self, name: &str) {
        self.styles.write().remove(name);
    }

    /// Dispatches a `resize` event to every registered listener.
    pub fn resize(&self) {
        let listeners = self.resize.snapshot();
        trace!(listeners = listeners.len(), "Dispatching resize");
        for listener in listeners {
            listener();
        }
    }

    /// Updates whether `query` matches; dispatches `change` only when the result flips.
    pub fn set_media_matches(&self, query: &str, matches: bool) {
        let state = self.media_state(query);
        if state.matches.swap(matches, Ordering::AcqRel) == matches {
            return;
        }

        let listeners = state.listeners.snapshot();
        trace!(query, matches, listeners = listeners.len(), "Dispatching media change");
        for listener in listeners {
            listener(MediaQueryChange { matches });
        }
    }

    #[must_use]
    pub fn resize_listener_count(&self) -> usize {
        self.resize.len()
    }

    #[must_use]
    pub fn change_listener_count(&self, query: &str) -> usize {
        self.media.read().get(query).map_or(0, |state| state.listeners.len())
    }

    fn media_state(&self, query: &str) -> Arc<MediaState> {
        if let Some(state) = self.media.read().get(query) {
            return Arc::clone(state);
        }
        let mut media = self.media.write();
        Arc::clone(media.entry(query.to_owned()).or_insert_with(|| {
            Arc::new(MediaState { matches: AtomicBool::new(false), listeners: ListenerSet::new() })
        }))
    }
}

impl Viewport for MemoryViewport {
    type MediaQuery = MemoryMediaQuery;

    fn root_style_property(&self, name: &str) -> Option<String> {
        self.styles.read().get(name).cloned()
    }

    fn add_resize_listener(&self, listener: ResizeListener) -> ListenerId {
        self.resize.add(listener)
    }

    fn remove_resize_listener(&self, id: ListenerId) {
        self.resize.remove(id);
    }

    fn match_media(&self, query: &str) -> Self::MediaQuery {
        MemoryMediaQuery { media: Arc::from(query), state: self.media_state(query) }
    }
}

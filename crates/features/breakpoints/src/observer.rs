//! # Breakpoint Observer
//!
//! Keeps the store's `breakpoint` and `hasHover` fields in sync with the viewport
//! while the owning view is mounted.
//!
//! ## Lifecycle
//! [`BreakpointObserver::observe`] attaches a `resize` listener, publishes the current
//! breakpoint, attaches a `change` listener to the hover media query and publishes
//! the current hover capability, in that order. [`BreakpointObserver::unobserve`]
//! detaches both listeners and cancels pending debounced work, so nothing is
//! committed after it returns. Both calls are idempotent.
//!
//! ## Publication
//! - `SET_BREAKPOINT` is committed only when the computed name differs from the
//!   last one seen. The first computation ever always commits; the last name is
//!   kept across `unobserve`, so re-observing commits only if it changed meanwhile.
//! - `SET_HAS_HOVER` is committed on every computation.
//!
//! Every commit, including debounced ones, happens while the observer's state lock
//! is held. A [`Store`] must not call back into the observer.

use crate::debounce::{DEBOUNCE_WAIT, Debounce};
use crate::plugin::Lifecycle;
use crate::store::Store;
use crate::viewport::{ListenerId, MediaQueryList, Viewport};
use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tracing::debug;
use vantage_domain::breakpoints::{
    BREAKPOINT_PROPERTY, Breakpoint, HOVER_MEDIA_QUERY, Mutation,
};

struct ObserverState<M> {
    is_observing: bool,
    media_query: Option<M>,
    resize_listener: Option<ListenerId>,
    change_listener: Option<ListenerId>,
}

impl<M> Default for ObserverState<M> {
    fn default() -> Self {
        Self { is_observing: false, media_query: None, resize_listener: None, change_listener: None }
    }
}

struct Inner<V: Viewport, S> {
    viewport: V,
    store: S,
    state: Mutex<ObserverState<V::MediaQuery>>,
    active: Mutex<Option<Breakpoint>>,
    on_resize: Debounce<()>,
    on_change: Debounce<bool>,
}

/// Publishes viewport breakpoint and hover capability into a [`Store`].
///
/// Cloning yields another handle to the same observer.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use vantage_breakpoints::{BreakpointObserver, MemoryStore, MemoryViewport};
///
/// let viewport = Arc::new(MemoryViewport::new());
/// viewport.set_style_property("--breakpoint", "\"large\"");
/// let store = Arc::new(MemoryStore::new());
///
/// let observer = BreakpointObserver::new(Arc::clone(&viewport), Arc::clone(&store));
/// observer.observe();
///
/// assert_eq!(store.state().breakpoint.as_ref().map(|b| b.as_str()), Some("large"));
/// observer.unobserve();
/// ```
pub struct BreakpointObserver<V: Viewport, S: Store> {
    inner: Arc<Inner<V, S>>,
}

impl<V: Viewport, S: Store> Clone for BreakpointObserver<V, S> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<V: Viewport, S: Store> BreakpointObserver<V, S> {
    /// Observer with the default 99 ms debounce window.
    pub fn new(viewport: V, store: S) -> Self {
        Self::with_wait(viewport, store, DEBOUNCE_WAIT)
    }

    /// Observer with a custom debounce window.
    ///
    /// [`Duration::ZERO`] applies every event synchronously, with no timer and no runtime.
    pub fn with_wait(viewport: V, store: S, wait: Duration) -> Self {
        let inner = Arc::new_cyclic(|weak: &Weak<Inner<V, S>>| {
            let on_resize = {
                let weak = weak.clone();
                Debounce::new(wait, move |()| {
                    let Some(inner) = weak.upgrade() else { return };
                    // Held through the commit so `unobserve` cannot slip in between.
                    let state = inner.state.lock();
                    if state.is_observing {
                        inner.set_breakpoint();
                    }
                    drop(state);
                })
            };
            let on_change = {
                let weak = weak.clone();
                Debounce::new(wait, move |has_hover: bool| {
                    let Some(inner) = weak.upgrade() else { return };
                    let state = inner.state.lock();
                    if state.is_observing {
                        inner.set_has_hover(has_hover);
                    }
                    drop(state);
                })
            };

            Inner {
                viewport,
                store,
                state: Mutex::new(ObserverState::default()),
                active: Mutex::new(None),
                on_resize,
                on_change,
            }
        });

        Self { inner }
    }

    /// Starts observing. Does nothing if already observing.
    pub fn observe(&self) {
        let inner = &self.inner;
        let mut state = inner.state.lock();
        if state.is_observing {
            return;
        }

        let weak = Arc::downgrade(inner);
        state.resize_listener = Some(inner.viewport.add_resize_listener(Arc::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_resize.call(());
            }
        })));
        inner.set_breakpoint();

        let media_query = inner.viewport.match_media(HOVER_MEDIA_QUERY);
        let weak = Arc::downgrade(inner);
        state.change_listener = Some(media_query.add_change_listener(Arc::new(move |change| {
            if let Some(inner) = weak.upgrade() {
                inner.on_change.call(change.matches);
            }
        })));
        inner.set_has_hover(media_query.matches());

        state.media_query = Some(media_query);
        state.is_observing = true;
        debug!("Breakpoint observer attached");
    }

    /// Stops observing. Does nothing if not observing.
    ///
    /// After this returns no pending debounced recomputation will commit.
    pub fn unobserve(&self) {
        let inner = &self.inner;
        let mut state = inner.state.lock();
        if !state.is_observing {
            return;
        }

        detach(&inner.viewport, &mut state);
        inner.on_resize.cancel();
        inner.on_change.cancel();
        debug!("Breakpoint observer detached");
    }

    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.inner.is_observing()
    }

    /// Last breakpoint computed. Survives `unobserve`.
    #[must_use]
    pub fn active_breakpoint(&self) -> Option<Breakpoint> {
        self.inner.active.lock().clone()
    }

    #[must_use]
    pub fn viewport(&self) -> &V {
        &self.inner.viewport
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.inner.store
    }
}

impl<V: Viewport, S: Store> Inner<V, S> {
    fn is_observing(&self) -> bool {
        self.state.lock().is_observing
    }

    fn compute_breakpoint(&self) -> Breakpoint {
        Breakpoint::from_css_value(self.viewport.root_style_property(BREAKPOINT_PROPERTY).as_deref())
    }

    fn set_breakpoint(&self) {
        let breakpoint = self.compute_breakpoint();
        let mut active = self.active.lock();
        if active.as_ref() != Some(&breakpoint) {
            debug!(%breakpoint, "Breakpoint changed");
            self.store.commit(Mutation::SetBreakpoint(breakpoint.clone()));
        }
        *active = Some(breakpoint);
    }

    fn set_has_hover(&self, has_hover: bool) {
        self.store.commit(Mutation::SetHasHover(has_hover));
    }
}

fn detach<V: Viewport>(viewport: &V, state: &mut ObserverState<V::MediaQuery>) {
    if let Some(id) = state.resize_listener.take() {
        viewport.remove_resize_listener(id);
    }
    if let (Some(media_query), Some(id)) = (state.media_query.take(), state.change_listener.take()) {
        media_query.remove_change_listener(id);
    }
    state.is_observing = false;
}

impl<V: Viewport, S> Drop for Inner<V, S> {
    fn drop(&mut self) {
        detach(&self.viewport, self.state.get_mut());
    }
}

impl<V: Viewport, S: Store> Lifecycle for BreakpointObserver<V, S> {
    fn mounted(&self) {
        self.observe();
    }

    fn before_destroy(&self) {
        self.unobserve();
    }
}

impl<V: Viewport, S: Store> fmt::Debug for BreakpointObserver<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreakpointObserver")
            .field("is_observing", &self.is_observing())
            .field("active_breakpoint", &self.active_breakpoint())
            .field("wait", &self.inner.on_resize.wait())
            .finish_non_exhaustive()
    }
}

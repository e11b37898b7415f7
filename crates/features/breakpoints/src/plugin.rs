//! View lifecycle wiring.
//!
//! A host registers [`Lifecycle`] mixins once with [`install`] and then calls
//! [`Mixins::mount`] for every view it mounts. The returned [`Mounted`] guard
//! runs `before_destroy` exactly once, when unmounted or dropped.

use crate::observer::BreakpointObserver;
use crate::store::Store;
use crate::viewport::Viewport;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Callbacks a host view framework runs around a view's lifetime.
pub trait Lifecycle: Send + Sync + 'static {
    /// The view was inserted into the page.
    fn mounted(&self);

    /// The view is about to be removed.
    fn before_destroy(&self);
}

/// Mixins attached to every mounted view, in registration order.
#[derive(Default, Clone)]
pub struct Mixins {
    entries: Vec<Arc<dyn Lifecycle>>,
}

impl Mixins {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mixin: Arc<dyn Lifecycle>) {
        self.entries.push(mixin);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs `mounted` on every mixin.
    pub fn mount(&self) -> Mounted {
        debug!(mixins = self.entries.len(), "Mounting view");
        for mixin in &self.entries {
            mixin.mounted();
        }
        Mounted { entries: self.entries.clone(), destroyed: false }
    }
}

impl fmt::Debug for Mixins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mixins").field("len", &self.entries.len()).finish()
    }
}

/// A mounted view. Runs `before_destroy` on every mixin once.
#[must_use = "dropping the guard unmounts the view immediately"]
pub struct Mounted {
    entries: Vec<Arc<dyn Lifecycle>>,
    destroyed: bool,
}

impl Mounted {
    pub fn unmount(mut self) {
        self.destroy();
    }

    fn destroy(&mut self) {
        if std::mem::replace(&mut self.destroyed, true) {
            return;
        }
        debug!(mixins = self.entries.len(), "Unmounting view");
        for mixin in &self.entries {
            mixin.before_destroy();
        }
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl fmt::Debug for Mounted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mounted")
            .field("mixins", &self.entries.len())
            .field("destroyed", &self.destroyed)
            .finish()
    }
}

/// Builds a [`BreakpointObserver`] and registers it as a mixin, so it observes
/// while any view mounted through `mixins` is alive.
pub fn install<V, S>(mixins: &mut Mixins, viewport: V, store: S) -> BreakpointObserver<V, S>
where
    V: Viewport,
    S: Store,
{
    let observer = BreakpointObserver::new(viewport, store);
    mixins.push(Arc::new(observer.clone()));
    debug!("Breakpoint observer installed");
    observer
}

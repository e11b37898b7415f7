//! Store boundary the observer publishes into.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::watch;
use tracing::debug;
use vantage_domain::breakpoints::{BreakpointState, Mutation};

/// Keyed-action store. The observer only writes, it never reads state back.
pub trait Store: Send + Sync + 'static {
    fn commit(&self, mutation: Mutation);
}

impl<S: Store> Store for Arc<S> {
    fn commit(&self, mutation: Mutation) {
        (**self).commit(mutation);
    }
}

/// Adapts a closure into a [`Store`].
#[must_use]
pub fn from_fn<F>(commit: F) -> FnStore<F>
where
    F: Fn(Mutation) + Send + Sync + 'static,
{
    FnStore(commit)
}

/// [`Store`] backed by a closure, see [`from_fn`].
pub struct FnStore<F>(F);

impl<F> Store for FnStore<F>
where
    F: Fn(Mutation) + Send + Sync + 'static,
{
    fn commit(&self, mutation: Mutation) {
        (self.0)(mutation);
    }
}

impl<F> fmt::Debug for FnStore<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStore").finish_non_exhaustive()
    }
}

/// In-process `breakpoints` store module.
///
/// Applies every commit to a [`BreakpointState`] and broadcasts the new state
/// to subscribers. Also records the commit history, which tests assert on.
#[derive(Debug)]
pub struct MemoryStore {
    state: watch::Sender<BreakpointState>,
    history: Mutex<Vec<Mutation>>,
    commits: AtomicUsize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        let (state, _) = watch::channel(BreakpointState::default());
        Self { state, history: Mutex::new(Vec::new()), commits: AtomicUsize::new(0) }
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> BreakpointState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every commit.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<BreakpointState> {
        self.state.subscribe()
    }

    /// Every mutation committed so far, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<Mutation> {
        self.history.lock().clone()
    }

    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::Acquire)
    }

    /// Forgets the recorded history. State is kept.
    pub fn clear_history(&self) {
        self.history.lock().clear();
    }
}

impl Store for MemoryStore {
    fn commit(&self, mutation: Mutation) {
        debug!(key = mutation.key(), ?mutation, "Commit");
        self.state.send_modify(|state| state.apply(&mutation));
        self.history.lock().push(mutation);
        self.commits.fetch_add(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_domain::breakpoints::Breakpoint;

    #[test]
    fn reducer_reflects_last_commit_of_each_kind() {
        let store = MemoryStore::new();
        store.commit(Mutation::SetBreakpoint(Breakpoint::new("small")));
        store.commit(Mutation::SetHasHover(true));
        store.commit(Mutation::SetBreakpoint(Breakpoint::new("large")));

        let state = store.state();
        assert_eq!(state.breakpoint, Some(Breakpoint::new("large")));
        assert!(state.has_hover);
        assert_eq!(store.commit_count(), 3);
        assert_eq!(store.history().len(), 3);
    }

    #[test]
    fn subscribers_see_new_state() {
        let store = MemoryStore::new();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap_or(true));

        store.commit(Mutation::SetHasHover(true));
        assert!(rx.has_changed().unwrap_or(false));
        assert!(rx.borrow_and_update().has_hover);
    }

    #[test]
    fn closures_and_shared_stores_are_stores() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let store = from_fn(move |mutation: Mutation| sink.lock().push(mutation.key()));
        store.commit(Mutation::SetHasHover(false));
        assert_eq!(*seen.lock(), vec![Mutation::SET_HAS_HOVER]);

        let shared = Arc::new(MemoryStore::new());
        Store::commit(&shared, Mutation::SetHasHover(true));
        assert_eq!(shared.commit_count(), 1);
    }

    #[test]
    fn clearing_history_keeps_state() {
        let store = MemoryStore::new();
        store.commit(Mutation::SetHasHover(true));
        store.clear_history();

        assert!(store.history().is_empty());
        assert!(store.state().has_hover);
        assert_eq!(store.commit_count(), 1);
    }
}

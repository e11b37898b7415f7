use crate::observer::BreakpointObserver;
use crate::store::Store;
use crate::viewport::Viewport;
use dioxus::prelude::{use_drop, use_hook};

/// Observes breakpoints for as long as the calling component is mounted.
///
/// `init` runs once, on the component's first render, and builds the viewport
/// binding and the store. Later renders return the same observer.
pub fn use_breakpoint_observer<V, S>(init: impl FnOnce() -> (V, S)) -> BreakpointObserver<V, S>
where
    V: Viewport,
    S: Store,
{
    let observer = use_hook(move || {
        let (viewport, store) = init();
        let observer = BreakpointObserver::new(viewport, store);
        observer.observe();
        observer
    });

    let detached = observer.clone();
    use_drop(move || detached.unobserve());

    observer
}

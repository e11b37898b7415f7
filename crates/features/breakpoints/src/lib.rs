//! # Breakpoints
//!
//! Tracks the page's active CSS breakpoint and hover capability and publishes them
//! into the application store.
//!
//! - [`viewport`]: the host boundary (root style, `resize`, media queries).
//! - [`store`]: the keyed-action store boundary plus an in-process [`MemoryStore`].
//! - [`BreakpointObserver`]: attaches to a viewport, debounces events by 99 ms and commits
//!   `breakpoints/SET_BREAKPOINT` and `breakpoints/SET_HAS_HOVER`.
//! - [`plugin`]: mount/unmount wiring for view frameworks.
//!
//! Debounced recomputation needs a Tokio runtime; the initial publication in
//! [`BreakpointObserver::observe`] does not.
//!
//! ```rust
//! use std::sync::Arc;
//! use vantage_breakpoints::plugin::{Mixins, install};
//! use vantage_breakpoints::{MemoryStore, MemoryViewport};
//!
//! let viewport = Arc::new(MemoryViewport::new());
//! let store = Arc::new(MemoryStore::new());
//!
//! let mut mixins = Mixins::new();
//! let observer = install(&mut mixins, Arc::clone(&viewport), Arc::clone(&store));
//!
//! let view = mixins.mount();
//! assert!(observer.is_observing());
//! assert_eq!(store.state().breakpoint.unwrap().as_str(), "medium");
//!
//! view.unmount();
//! assert!(!observer.is_observing());
//! ```

pub mod debounce;
#[cfg(feature = "dioxus")]
mod hooks;
pub mod memory;
mod observer;
pub mod plugin;
pub mod store;
pub mod viewport;

#[cfg(feature = "dioxus")]
pub use hooks::use_breakpoint_observer;
pub use memory::{MemoryMediaQuery, MemoryViewport};
pub use observer::BreakpointObserver;
pub use store::{MemoryStore, Store};
pub use vantage_domain::breakpoints::{
    BREAKPOINT_PROPERTY, Breakpoint, BreakpointState, HOVER_MEDIA_QUERY, Mutation,
};

//! Facade crate for the Vantage client glue.
//! Re-exports the domain types, the breakpoint observer and the environment validator.
//! Keep this crate thin: it should compose other crates, not implement logic.
//!
//! ## Usage
//! - Add `vantage`, plus the `dioxus` feature for the component hook.
//! - Validate the environment at startup with [`env::load_environment`].
//! - Attach a [`breakpoints::BreakpointObserver`] to the page viewport.

pub use vantage_breakpoints as breakpoints;
pub use vantage_domain as domain;
pub use vantage_env as env;

/// Build-time enabled features (by Cargo feature).
pub mod features {
    pub const ENABLED: &[&str] = &[
        "breakpoints",
        "env",
        #[cfg(feature = "dioxus")]
        "dioxus",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

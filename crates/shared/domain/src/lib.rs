//! # Domain Models
//!
//! Pure data shared by the workspace: breakpoint/store types consumed by the viewport
//! observer, and the raw/normalized environment records produced at startup.
//! Keep it lean: no I/O, no timers, just data and simple helpers.

pub mod breakpoints;
pub mod environment;

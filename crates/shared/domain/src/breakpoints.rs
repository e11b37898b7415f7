//! Breakpoint names and the `breakpoints` store module.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Custom property on the root element that carries the active breakpoint name.
pub const BREAKPOINT_PROPERTY: &str = "--breakpoint";

/// Media feature query for "true hover with a fine pointer".
pub const HOVER_MEDIA_QUERY: &str = "(hover: hover) and (pointer: fine)";

/// Named viewport-size category, as published by the page stylesheet.
///
/// The set of names is open-ended; only [`Breakpoint::DEFAULT`] is known here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakpoint(Cow<'static, str>);

impl Breakpoint {
    /// Used whenever the stylesheet does not provide a name.
    pub const DEFAULT: Self = Self(Cow::Borrowed("medium"));

    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Interprets a computed `--breakpoint` value.
    ///
    /// Surrounding whitespace is trimmed and every `"` is removed, so both
    /// `small` and `"small"` resolve to `small`. Missing or empty values fall
    /// back to [`Breakpoint::DEFAULT`].
    #[must_use]
    pub fn from_css_value(raw: Option<&str>) -> Self {
        let name: String = raw.unwrap_or_default().trim().chars().filter(|c| *c != '"').collect();
        if name.is_empty() { Self::DEFAULT } else { Self(Cow::Owned(name)) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Breakpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Breakpoint {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Breakpoint {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Keyed action committed to the application store.
///
/// Serializes as `{"type": "<key>", "payload": <value>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Mutation {
    #[serde(rename = "breakpoints/SET_BREAKPOINT")]
    SetBreakpoint(Breakpoint),
    #[serde(rename = "breakpoints/SET_HAS_HOVER")]
    SetHasHover(bool),
}

impl Mutation {
    pub const SET_BREAKPOINT: &'static str = "breakpoints/SET_BREAKPOINT";
    pub const SET_HAS_HOVER: &'static str = "breakpoints/SET_HAS_HOVER";

    /// Store key of this action.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::SetBreakpoint(_) => Self::SET_BREAKPOINT,
            Self::SetHasHover(_) => Self::SET_HAS_HOVER,
        }
    }
}

/// State of the `breakpoints` store module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointState {
    /// `None` until the first observation publishes a value.
    pub breakpoint: Option<Breakpoint>,
    pub has_hover: bool,
}

impl BreakpointState {
    /// Applies a committed mutation.
    pub fn apply(&mut self, mutation: &Mutation) {
        match mutation {
            Mutation::SetBreakpoint(breakpoint) => self.breakpoint = Some(breakpoint.clone()),
            Mutation::SetHasHover(has_hover) => self.has_hover = *has_hover,
        }
    }
}

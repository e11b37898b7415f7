#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the workspace.
//! Currently this is the `#[vantage_error]` attribute used by every crate that
//! exposes an error enum, so error wiring looks the same everywhere.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! vantage-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Type Aliasing**: Emits `type Result<T, E = Error> = std::result::Result<T, E>` next to the enum.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to `Result<T, Error>` and to `Result<T, Source>` for every wrapped source error.
/// * **Standard Conversions**: Implements `From<Source>` for variants with a source field,
///   so `?` lifts upstream errors.
/// * **Context rendering**: Emits a module-private `format_context` helper for `#[error(...)]`
///   strings; it renders `" (context)"` or nothing.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. A variant with a `source` field (or a field marked `#[source]`) must also carry
///    `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[vantage_derive::vantage_error]
/// pub enum LoaderError {
///     #[error("Config source error{}: {source}", format_context(.context))]
///     Source { source: config::ConfigError, context: Option<Cow<'static, str>> },
/// }
///
/// fn read() -> Result<config::Config> {
///     config::Config::builder().build().context("Building config")
/// }
/// ```
#[proc_macro_attribute]
pub fn vantage_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}

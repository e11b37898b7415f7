use std::borrow::Cow;

/// Errors raised while building the runtime configuration.
#[vantage_derive::vantage_error]
pub enum ConfigError {
    /// A startup input failed validation. Deterministic and fatal: never retried or defaulted.
    #[error("[{label}]: {message}")]
    Invalid { label: Cow<'static, str>, key: &'static str, message: Cow<'static, str> },

    /// The configuration sources could not be read or deserialized.
    #[error("Config source error{}: {source}", format_context(.context))]
    Load { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

impl ConfigError {
    /// Input key that failed validation, if any.
    #[must_use]
    pub const fn key(&self) -> Option<&'static str> {
        match self {
            Self::Invalid { key, .. } => Some(*key),
            Self::Load { .. } => None,
        }
    }
}

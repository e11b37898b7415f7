//! # Environment Validation
//!
//! Turns the raw startup inputs into an [`EnvironmentConfig`].
//!
//! Rules run in a fixed order and the first failure wins:
//! 1. `API_URL`, `ASSET_BUCKET_URL`, `ASSET_SERVICE_URL`, `BASE_URL`, `CMS_URL` must be absolute URLs.
//! 2. `NODE_ENV` must be `development`, `staging` or `production`.
//! 3. `PROJECT_SLUG` and `SESSION_COOKIE` must be non-empty.
//!
//! URLs are re-serialized in canonical form with one trailing `/` removed.

use crate::error::ConfigError;
use std::borrow::Cow;
use std::str::FromStr;
use tracing::debug;
use url::Url;
use vantage_domain::environment::{
    EnvironmentConfig, EnvironmentConfigInner, NodeEnv, RawEnvironment,
};

/// Label used in error messages when none is configured.
pub const DEFAULT_LABEL: &str = "nuxt.config.js";

/// Raw `BASE_URL` value that marks a local development host.
pub const LOCALHOST_BASE_URL: &str = "http://localhost:3000";

/// Rendering of a missing input inside error messages.
const MISSING: &str = "undefined";

/// Validates [`RawEnvironment`] inputs.
///
/// The label names the configuration source in error messages,
/// e.g. `[nuxt.config.js]: Invalid API_URL: ...`.
#[derive(Debug, Clone)]
pub struct EnvValidator {
    label: Cow<'static, str>,
}

impl Default for EnvValidator {
    fn default() -> Self {
        Self { label: Cow::Borrowed(DEFAULT_LABEL) }
    }
}

impl EnvValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Retargets error messages to another configuration source.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Validates and normalizes the inputs.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] for the first input that breaks a rule.
    pub fn validate(&self, raw: &RawEnvironment) -> Result<EnvironmentConfig, ConfigError> {
        let [api, asset_bucket, asset_service, base, cms] = raw.urls();
        let api_url = self.url(api)?;
        let asset_bucket_url = self.url(asset_bucket)?;
        let asset_service_url = self.url(asset_service)?;
        let base_url = self.url(base)?;
        let cms_url = self.url(cms)?;

        let node_env = self.node_env(raw.node_env.as_deref())?;

        let project_slug = self.non_empty("PROJECT_SLUG", raw.project_slug.as_deref())?;
        let session_cookie = self.non_empty("SESSION_COOKIE", raw.session_cookie.as_deref())?;

        Ok(EnvironmentConfig::new(EnvironmentConfigInner {
            api_url,
            asset_bucket_url,
            asset_service_url,
            base_url,
            cms_url,
            is_development: node_env == NodeEnv::Development,
            // Exact match on the raw input, before normalization.
            is_localhost: raw.base_url.as_deref() == Some(LOCALHOST_BASE_URL),
            is_production: node_env == NodeEnv::Production,
            project_slug,
            session_cookie,
        }))
    }

    fn url(&self, (key, value): (&'static str, Option<&str>)) -> Result<String, ConfigError> {
        let parsed = value.and_then(|v| Url::parse(v).ok()).ok_or_else(|| {
            self.invalid(key, format!("Invalid {key}: expected URL, received \"{}\".", shown(value)))
        })?;
        Ok(normalize_url(&parsed))
    }

    fn node_env(&self, value: Option<&str>) -> Result<NodeEnv, ConfigError> {
        value.and_then(|v| NodeEnv::from_str(v).ok()).ok_or_else(|| {
            self.invalid(
                "NODE_ENV",
                format!(
                    "Invalid NODE_ENV: expected \"development\", \"staging\" or \"production\", received \"{}\".",
                    shown(value)
                ),
            )
        })
    }

    fn non_empty(&self, key: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
        match value {
            Some(v) if !v.is_empty() => Ok(v.to_owned()),
            _ => Err(self.invalid(
                key,
                format!("Invalid {key}: expected non-empty string, received \"{}\".", shown(value)),
            )),
        }
    }

    fn invalid(&self, key: &'static str, message: String) -> ConfigError {
        debug!(key, label = %self.label, "Environment input rejected");
        ConfigError::Invalid { label: self.label.clone(), key, message: message.into() }
    }
}

/// Validates with the default label.
///
/// # Errors
/// See [`EnvValidator::validate`].
pub fn validate_env(raw: &RawEnvironment) -> Result<EnvironmentConfig, ConfigError> {
    EnvValidator::default().validate(raw)
}

/// Canonical serialization without a single trailing slash.
fn normalize_url(url: &Url) -> String {
    let serialized = url.as_str();
    serialized.strip_suffix('/').unwrap_or(serialized).to_owned()
}

fn shown(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

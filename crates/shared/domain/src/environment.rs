//! Raw environment inputs and the normalized runtime configuration.

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;
use strum::{AsRefStr, Display, EnumString, IntoStaticStr, VariantNames};

/// Deployment stage, parsed from the exact lowercase `NODE_ENV` value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NodeEnv {
    Development,
    Staging,
    Production,
}

/// Unvalidated startup inputs. Every key may be missing.
///
/// Field names accept both `API_URL` and `api_url` spellings, since some
/// sources (the `config` crate's environment source among them) lowercase keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEnvironment {
    #[serde(rename = "API_URL", alias = "api_url")]
    pub api_url: Option<String>,
    #[serde(rename = "ASSET_BUCKET_URL", alias = "asset_bucket_url")]
    pub asset_bucket_url: Option<String>,
    #[serde(rename = "ASSET_SERVICE_URL", alias = "asset_service_url")]
    pub asset_service_url: Option<String>,
    #[serde(rename = "BASE_URL", alias = "base_url")]
    pub base_url: Option<String>,
    #[serde(rename = "CMS_URL", alias = "cms_url")]
    pub cms_url: Option<String>,
    #[serde(rename = "NODE_ENV", alias = "node_env")]
    pub node_env: Option<String>,
    #[serde(rename = "PROJECT_SLUG", alias = "project_slug")]
    pub project_slug: Option<String>,
    #[serde(rename = "SESSION_COOKIE", alias = "session_cookie")]
    pub session_cookie: Option<String>,
}

impl RawEnvironment {
    /// Input keys, in validation order.
    pub const KEYS: [&'static str; 8] = [
        "API_URL",
        "ASSET_BUCKET_URL",
        "ASSET_SERVICE_URL",
        "BASE_URL",
        "CMS_URL",
        "NODE_ENV",
        "PROJECT_SLUG",
        "SESSION_COOKIE",
    ];

    /// The five URL-valued inputs with their keys, in validation order.
    #[must_use]
    pub fn urls(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("API_URL", self.api_url.as_deref()),
            ("ASSET_BUCKET_URL", self.asset_bucket_url.as_deref()),
            ("ASSET_SERVICE_URL", self.asset_service_url.as_deref()),
            ("BASE_URL", self.base_url.as_deref()),
            ("CMS_URL", self.cms_url.as_deref()),
        ]
    }
}

/// Normalized configuration fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfigInner {
    #[serde(rename = "apiURL")]
    pub api_url: String,
    #[serde(rename = "assetBucketURL")]
    pub asset_bucket_url: String,
    #[serde(rename = "assetServiceURL")]
    pub asset_service_url: String,
    #[serde(rename = "baseURL")]
    pub base_url: String,
    #[serde(rename = "cmsURL")]
    pub cms_url: String,
    #[serde(rename = "isDevelopment")]
    pub is_development: bool,
    #[serde(rename = "isLocalhost")]
    pub is_localhost: bool,
    #[serde(rename = "isProduction")]
    pub is_production: bool,
    #[serde(rename = "projectSlug")]
    pub project_slug: String,
    #[serde(rename = "sessionCookie")]
    pub session_cookie: String,
}

/// Runtime configuration produced once at startup.
///
/// Arc-wrapped for cheap cloning into subsystems; read-only after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentConfig {
    inner: Arc<EnvironmentConfigInner>,
}

impl EnvironmentConfig {
    #[must_use]
    pub fn new(inner: EnvironmentConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for EnvironmentConfig {
    type Target = EnvironmentConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

//! # Environment
//!
//! Startup validator for the web application's environment inputs.
//!
//! [`EnvLoader`] gathers `API_URL`, `ASSET_BUCKET_URL`, `ASSET_SERVICE_URL`, `BASE_URL`,
//! `CMS_URL`, `NODE_ENV`, `PROJECT_SLUG` and `SESSION_COOKIE` from a file and the process
//! environment; [`EnvValidator`] checks them and produces an immutable
//! [`EnvironmentConfig`]. Any failure is fatal and should stop startup.
//!
//! ```rust
//! use vantage_env::{RawEnvironment, validate_env};
//!
//! let raw = RawEnvironment {
//!     api_url: Some("https://api.example.com/".to_owned()),
//!     asset_bucket_url: Some("https://bucket.example.com".to_owned()),
//!     asset_service_url: Some("https://assets.example.com".to_owned()),
//!     base_url: Some("http://localhost:3000".to_owned()),
//!     cms_url: Some("https://cms.example.com".to_owned()),
//!     node_env: Some("development".to_owned()),
//!     project_slug: Some("demo".to_owned()),
//!     session_cookie: Some("sid".to_owned()),
//! };
//!
//! let config = validate_env(&raw).unwrap();
//! assert_eq!(config.api_url, "https://api.example.com");
//! assert!(config.is_localhost && config.is_development);
//! ```

mod error;
mod loader;
pub mod validator;

pub use error::{ConfigError, ConfigErrorExt};
pub use loader::{EnvLoader, load_environment};
pub use validator::{EnvValidator, validate_env};
pub use vantage_domain::environment::{EnvironmentConfig, NodeEnv, RawEnvironment};

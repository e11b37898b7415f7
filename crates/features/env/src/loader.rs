use crate::error::{ConfigError, ConfigErrorExt};
use crate::validator::EnvValidator;
use config::{Config, Environment, File};
use std::borrow::Cow;
use std::path::PathBuf;
use tracing::info;
use vantage_domain::environment::{EnvironmentConfig, RawEnvironment};

/// Collects the startup inputs and validates them.
///
/// Sources are layered:
/// 1. **File** (optional): any format the `config` crate recognizes by extension
///    (`.toml`, `.json`, `.yaml`, ...). Keys are snake case, e.g. `api_url`.
///    A file that was configured but is missing is an error.
/// 2. **Environment**: process variables (`API_URL`, `NODE_ENV`, ...) override the file.
///
/// # Example
/// ```rust,no_run
/// use vantage_env::EnvLoader;
///
/// let config = EnvLoader::new().file("site.toml").load()?;
/// println!("{}", config.base_url);
/// # Ok::<(), vantage_env::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    file: Option<PathBuf>,
    vars: Option<config::Map<String, String>>,
    validator: EnvValidator,
}

impl EnvLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads base values from a configuration file.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Uses the given variables instead of the process environment.
    #[must_use]
    pub fn vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Label used in validation error messages.
    #[must_use]
    pub fn label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.validator = self.validator.with_label(label);
        self
    }

    /// Reads the inputs without validating them.
    ///
    /// # Errors
    /// Returns [`ConfigError::Load`] if a configured file is missing or malformed.
    pub fn load_raw(&self) -> Result<RawEnvironment, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = &self.file {
            info!("Loading environment from {}", path.display());
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        builder = builder.add_source(
            Environment::default().source(self.vars.clone()).convert_case(config::Case::Snake),
        );

        let raw = builder
            .build()
            .context("Failed to build environment sources")?
            .try_deserialize::<RawEnvironment>()
            .context("Failed to deserialize environment")?;

        Ok(raw)
    }

    /// Reads and validates the inputs.
    ///
    /// # Errors
    /// Returns [`ConfigError::Load`] for source failures and [`ConfigError::Invalid`]
    /// for the first input that fails validation.
    pub fn load(&self) -> Result<EnvironmentConfig, ConfigError> {
        let raw = self.load_raw()?;
        let config = self.validator.validate(&raw)?;

        info!(
            base_url = %config.base_url,
            is_development = config.is_development,
            is_production = config.is_production,
            is_localhost = config.is_localhost,
            "Environment validated"
        );

        Ok(config)
    }
}

/// Loads and validates the process environment with default settings.
///
/// # Errors
/// See [`EnvLoader::load`].
pub fn load_environment() -> Result<EnvironmentConfig, ConfigError> {
    EnvLoader::new().load()
}

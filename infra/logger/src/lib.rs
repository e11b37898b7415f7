//! # Logger
//!
//! Process-wide logging bootstrap for the workspace binaries.
//! Configures console output (compact, pretty or JSON) on stdout or stderr,
//! optional rolling file output with non-blocking I/O, and `RUST_LOG`-aware filtering.
//!
//! ## Example
//!
//! ```rust
//! # use vantage_logger::{LevelFilter, LogFormat, Logger};
//!
//! let _logger = Logger::builder("vantage")
//!     .format(LogFormat::Compact)
//!     .stderr(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .expect("no other subscriber is installed");
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

/// Rotated files kept by default.
const KEEP_FILES: usize = 10;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Console output style.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line human readable output.
    #[default]
    Compact,
    /// Multi-line output with source locations.
    Pretty,
    /// Newline-delimited JSON, for log shippers.
    Json,
}

#[derive(Debug)]
struct FileOutput {
    dir: PathBuf,
    rotation: Rotation,
    keep: usize,
    json: bool,
}

/// Configures the global tracing subscriber. Created by [`Logger::builder`].
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    level: LevelFilter,
    directives: Option<String>,
    console: bool,
    stderr: bool,
    format: LogFormat,
    files: Option<FileOutput>,
    rotation: Rotation,
    keep: usize,
    json_files: bool,
}

impl LoggerBuilder {
    /// Minimum level when `RUST_LOG` is not set.
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Explicit filter directives (e.g., `vantage_env=debug,config=warn`), replacing `RUST_LOG`.
    ///
    /// Malformed directives make [`LoggerBuilder::init`] fail.
    #[must_use]
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.directives = Some(directives.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Writes console output to stderr, keeping stdout free for command output.
    #[must_use]
    pub const fn stderr(mut self, enabled: bool) -> Self {
        self.stderr = enabled;
        self
    }

    #[must_use]
    pub const fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Also writes rolling log files into `dir`, named after the logger.
    #[must_use]
    pub fn path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.files = Some(FileOutput {
            dir: dir.into(),
            rotation: self.rotation.clone(),
            keep: self.keep,
            json: self.json_files,
        });
        self
    }

    /// File rotation period. Only used together with [`LoggerBuilder::path`].
    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(files) = &mut self.files {
            files.rotation = rotation.clone();
        }
        self.rotation = rotation;
        self
    }

    /// Rotated files to keep on disk.
    #[must_use]
    pub const fn max_files(mut self, keep: usize) -> Self {
        if let Some(files) = &mut self.files {
            files.keep = keep;
        }
        self.keep = keep;
        self
    }

    /// Writes files as JSON lines.
    #[must_use]
    pub const fn json_files(mut self) -> Self {
        if let Some(files) = &mut self.files {
            files.json = true;
        }
        self.json_files = true;
        self
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown: it owns the file writer,
    /// and buffered lines are flushed when it drops.
    ///
    /// # Errors
    /// - [`LoggerError::InvalidConfiguration`] for a blank name, `max_files(0)`,
    ///   malformed filter directives, or when every output is disabled.
    /// - [`LoggerError::Io`] / [`LoggerError::Appender`] if the log directory is unusable.
    /// - [`LoggerError::Subscriber`] if this process already has a global subscriber.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.check()?;
        let filter = self.filter()?;

        let mut layers: Vec<BoxedLayer> = Vec::with_capacity(2);
        if self.console {
            layers.push(self.console_layer());
        }
        let guard = match &self.files {
            Some(files) => {
                let (layer, guard) = file_layer(&self.name, files)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(invalid("no output enabled, turn on the console or set a path"));
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;
        tracing::debug!(logger = %self.name, format = ?self.format, "Logging initialized");

        Ok(Logger { guard })
    }

    fn check(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(invalid("logger name is blank"));
        }
        if self.keep == 0 {
            return Err(invalid("max_files must be at least 1"));
        }
        Ok(())
    }

    fn filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.directives {
            None => Ok(builder.from_env_lossy()),
            Some(directives) => builder
                .parse(directives)
                .map_err(|e| invalid(format!("Invalid env filter '{directives}': {e}"))),
        }
    }

    fn console_layer(&self) -> BoxedLayer {
        let writer = if self.stderr {
            BoxMakeWriter::new(std::io::stderr)
        } else {
            BoxMakeWriter::new(std::io::stdout)
        };
        let layer = fmt::layer().with_writer(writer);
        match self.format {
            LogFormat::Compact => layer.compact().boxed(),
            LogFormat::Pretty => layer.pretty().boxed(),
            LogFormat::Json => layer.json().boxed(),
        }
    }
}

fn file_layer(name: &str, files: &FileOutput) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(&files.dir)
        .context(format!("creating {}", files.dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(files.rotation.clone())
        .filename_prefix(name)
        .filename_suffix("log")
        .max_log_files(files.keep)
        .build(&files.dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if files.json { layer.json().boxed() } else { layer.boxed() };
    Ok((layer, guard))
}

fn invalid(message: impl Into<std::borrow::Cow<'static, str>>) -> LoggerError {
    LoggerError::InvalidConfiguration { message: message.into(), context: None }
}

/// Handle to the installed logging system.
///
/// Holds the background file writer when file output is enabled.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring the global subscriber.
    ///
    /// `name` identifies the process in logs and prefixes rolling log files
    /// (e.g., `vantage.2026-10-19.log`).
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            level: LevelFilter::INFO,
            directives: None,
            console: true,
            stderr: false,
            format: LogFormat::Compact,
            files: None,
            rotation: Rotation::DAILY,
            keep: KEEP_FILES,
            json_files: false,
        }
    }

    /// The file writer guard, when file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Flushing log files");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder("test-app").env_filter("vantage=debug");
        assert!(builder.console);
        assert!(!builder.stderr);
        assert_eq!(builder.format, LogFormat::Compact);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert_eq!(builder.directives.as_deref(), Some("vantage=debug"));
        assert!(builder.files.is_none());
    }

    #[test]
    fn file_settings_apply_in_any_order() {
        let before = Logger::builder("test-app").max_files(5).json_files().path("logs");
        let after = Logger::builder("test-app").path("logs").max_files(5).json_files();

        for builder in [before, after] {
            let files = builder.files.expect("file output configured");
            assert_eq!(files.dir, PathBuf::from("logs"));
            assert_eq!(files.keep, 5);
            assert!(files.json);
        }
    }

    #[test]
    fn console_settings() {
        let builder = Logger::builder("test-app")
            .format(LogFormat::Json)
            .stderr(true)
            .level(LevelFilter::DEBUG);

        assert_eq!(builder.format, LogFormat::Json);
        assert_eq!(builder.level, LevelFilter::DEBUG);
        assert!(builder.stderr);
    }

    #[test]
    #[serial]
    fn empty_name_is_rejected() {
        let err = Logger::builder("  ").init().expect_err("blank names are invalid");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn zero_max_files_is_rejected() {
        let err = Logger::builder("test-app").max_files(0).init().expect_err("zero files");
        assert!(err.to_string().contains("max_files"));
    }

    #[test]
    #[serial]
    fn no_outputs_is_rejected() {
        let err = Logger::builder("test-app").console(false).init().expect_err("no layers");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn invalid_env_filter_is_rejected() {
        let err = Logger::builder("test-app")
            .env_filter("vantage=notalevel")
            .init()
            .expect_err("malformed filter");
        assert!(err.to_string().contains("Invalid env filter"));
    }
}

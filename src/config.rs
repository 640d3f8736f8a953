//! Runtime configuration.
//!
//! Values come from the command line or environment (see `main.rs`); this
//! module validates them once at startup.

use derive_more::{Display, Error};
use reqwest::Url;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default word service.
pub const DEFAULT_API_URL: &str = "https://wordle20250313105430.azurewebsites.net/";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default TUI log file.
pub const DEFAULT_LOG_FILE: &str = "wordie.log";

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {message}")]
pub struct ConfigError {
    /// Error message.
    pub message: String,
}

impl ConfigError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Where and how to reach the word service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    base_url: Url,
    timeout: Duration,
}

impl ProviderConfig {
    /// Validates a base URL and timeout.
    ///
    /// A trailing slash is added to the base URL so endpoint paths extend it
    /// rather than replace its last segment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL does not parse, is not http(s), or the
    /// timeout is zero.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let mut base = base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let base_url = Url::parse(&base)
            .map_err(|e| ConfigError::new(format!("invalid API URL '{base_url}': {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::new(format!(
                "API URL must use http or https, got '{}'",
                base_url.scheme()
            )));
        }
        if timeout.is_zero() {
            return Err(ConfigError::new("timeout must be greater than zero"));
        }

        Ok(Self { base_url, timeout })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Where tracing output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file; used while the TUI owns the terminal.
    File(PathBuf),
    /// Write to stderr.
    Stderr,
}

/// Tracing setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    target: LogTarget,
    default_filter: &'static str,
}

impl LogConfig {
    /// Log to a file at `info` unless `RUST_LOG` says otherwise.
    #[must_use]
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self {
            target: LogTarget::File(path.as_ref().to_path_buf()),
            default_filter: "info",
        }
    }

    /// Log to stderr at `warn` unless `RUST_LOG` says otherwise.
    #[must_use]
    pub const fn stderr() -> Self {
        Self {
            target: LogTarget::Stderr,
            default_filter: "warn",
        }
    }

    #[must_use]
    pub const fn target(&self) -> &LogTarget {
        &self.target
    }

    #[must_use]
    pub const fn default_filter(&self) -> &'static str {
        self.default_filter
    }
}

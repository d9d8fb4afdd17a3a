//! Host configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only needs to know where it listens and where the REST backend
//! lives. Everything else (site root, bundle names, reload port) comes from
//! the cargo-leptos metadata in the workspace manifest.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS: u64 = 180;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 26 * 1024 * 1024;

/// Errors produced while reading host configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A numeric variable held something that is not a number.
    #[error("invalid value for {key}: {value:?}")]
    InvalidNumber { key: String, value: String },

    /// `BACKEND_URL` was set but blank.
    #[error("BACKEND_URL must not be empty")]
    EmptyBackendUrl,

    /// `BACKEND_URL` did not start with `http://` or `https://`.
    #[error("BACKEND_URL must be an http(s) URL, got {0:?}")]
    BackendScheme(String),

    /// The cargo-leptos site configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend origin without a trailing slash.
    pub backend_url: String,
    pub timeouts: BackendTimeouts,
    pub max_upload_bytes: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            timeouts: BackendTimeouts {
                request_secs: DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
            },
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://localhost:5000`
    /// - `BACKEND_REQUEST_TIMEOUT_SECS`: default 180
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    /// - `MAX_UPLOAD_BYTES`: default 26 MiB
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] but reads through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let backend_url = parse_backend_url(lookup("BACKEND_URL").as_deref())?;
        let timeouts = BackendTimeouts {
            request_secs: parse_or(
                "BACKEND_REQUEST_TIMEOUT_SECS",
                lookup("BACKEND_REQUEST_TIMEOUT_SECS"),
                DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_or(
                "BACKEND_CONNECT_TIMEOUT_SECS",
                lookup("BACKEND_CONNECT_TIMEOUT_SECS"),
                DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
            )?,
        };
        let max_upload_bytes = parse_or("MAX_UPLOAD_BYTES", lookup("MAX_UPLOAD_BYTES"), DEFAULT_MAX_UPLOAD_BYTES)?;

        Ok(Self { port, backend_url, timeouts, max_upload_bytes })
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key: key.to_string(), value }),
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_BACKEND_URL.to_string());
    };
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBackendUrl);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::BackendScheme(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

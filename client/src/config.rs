//! Auth API configuration baked in at build time.
//!
//! Read from compile-time environment so the WASM bundle carries its own
//! settings:
//! - `SPENT_AUTH_API_BASE`: REST root of the auth API (default `/api/auth`)
//! - `SPENT_SESSION_POLL_SECS`: session listener poll interval (default 30)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "/api/auth";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("SPENT_AUTH_API_BASE must not be empty")]
    EmptyApiBase,
    #[error("invalid SPENT_SESSION_POLL_SECS: {value:?} (expected a positive integer)")]
    InvalidPollInterval { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub api_base: String,
    pub poll_interval_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

impl AuthConfig {
    /// Build config from the values captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a captured value is present but invalid.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("SPENT_AUTH_API_BASE"),
            option_env!("SPENT_SESSION_POLL_SECS"),
        )
    }

    /// Build config from raw optional values; absent values take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a blank API base or a non-positive interval.
    pub fn from_values(
        api_base: Option<&str>,
        poll_interval_secs: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base = match api_base {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyApiBase),
            Some(raw) => raw.trim().trim_end_matches('/').to_owned(),
            None => DEFAULT_API_BASE.to_owned(),
        };
        let poll_interval_secs = match poll_interval_secs {
            Some(raw) => parse_interval(raw)?,
            None => DEFAULT_POLL_INTERVAL_SECS,
        };
        Ok(Self { api_base, poll_interval_secs })
    }

    /// Absolute path of an endpoint under the API base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

fn parse_interval(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidPollInterval { value: raw.to_owned() }),
    }
}

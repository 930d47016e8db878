//! Client configuration for talking to a lease service.
//!
//! Settings come from the command line first, then the environment, then built-in defaults.

use std::time::Duration;

/// Default endpoint of the lease service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:7777";
/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable naming the service endpoint.
pub const BASE_URL_ENV: &str = "LEASE_URL";
/// Environment variable carrying the auth token.
pub const AUTH_TOKEN_ENV: &str = "OS_AUTH_TOKEN";
/// Environment variable overriding the request timeout.
pub const TIMEOUT_ENV: &str = "LEASE_TIMEOUT_SECS";

/// A configured setting that could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The setting at fault, e.g. "timeout".
    pub setting: &'static str,
    /// The value as given.
    pub value: String,
    /// Why the value was rejected.
    pub reason: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid {} '{}': {}", self.setting, self.value, self.reason)
    }
}

impl std::error::Error for ConfigError {}

/// Everything [`LeaseClient`](crate::LeaseClient) needs to reach the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service endpoint, without a trailing slash.
    pub base_url: String,
    /// Sent as `X-Auth-Token` when present.
    pub auth_token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Settings given on the command line.  Empty means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// `--base-url`
    pub base_url: Option<String>,
    /// `--auth-token`
    pub auth_token: Option<String>,
    /// `--timeout-secs`
    pub timeout_secs: Option<String>,
}

impl ClientConfig {
    /// Resolves a configuration from `overrides`, then `lookup` (normally the process
    /// environment), then defaults.
    ///
    /// # Returns
    /// * `Ok(ClientConfig)` - The resolved configuration
    /// * `Err(ConfigError)` - The base URL did not parse, or the timeout was not a whole number
    ///   of seconds
    pub fn resolve<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |given: Option<String>, env: &str| {
            given
                .filter(|s| !s.is_empty())
                .or_else(|| lookup(env).filter(|s| !s.is_empty()))
        };

        let base_url = pick(overrides.base_url, BASE_URL_ENV)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();
        match reqwest::Url::parse(&base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => {
                return Err(ConfigError {
                    setting: "base URL",
                    value: base_url,
                    reason: "expected an http or https URL".to_string(),
                });
            }
        }
        let auth_token = pick(overrides.auth_token, AUTH_TOKEN_ENV);
        let timeout = match pick(overrides.timeout_secs, TIMEOUT_ENV) {
            Some(secs) => secs
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError {
                    setting: "timeout",
                    value: secs.clone(),
                    reason: "expected whole seconds".to_string(),
                })?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            base_url,
            auth_token,
            timeout,
        })
    }

    /// [`ClientConfig::resolve`] against the real process environment.
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }
}

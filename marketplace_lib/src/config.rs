//! Client configuration read from the environment.

use std::time::Duration;

use marketplace_api::{Client, ClientOptions, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use url::Url;

use crate::error::MarketplaceError;

/// Base URL of the REST API.
pub const API_URL_VAR: &str = "NEXT_PUBLIC_API_URL";
/// Request timeout in seconds.
pub const TIMEOUT_VAR: &str = "MARKETPLACE_TIMEOUT_SECS";
/// Bearer token attached to every request.
pub const TOKEN_VAR: &str = "MARKETPLACE_API_TOKEN";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            token: None,
        }
    }
}

impl Config {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, MarketplaceError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset. An unparseable timeout falls back to the
    /// default; a base URL that does not parse as an http(s) URL with a host is
    /// rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MarketplaceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = match get(API_URL_VAR) {
            Some(url) => validate_base_url(&url)?,
            None => DEFAULT_BASE_URL.to_string(),
        };

        let timeout = match get(TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        "Ignoring invalid {}={:?}, using {}s",
                        TIMEOUT_VAR,
                        raw,
                        DEFAULT_TIMEOUT.as_secs()
                    );
                    DEFAULT_TIMEOUT
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            base_url,
            timeout,
            token: get(TOKEN_VAR).map(|t| t.trim().to_string()),
        })
    }

    /// Replaces the base URL, e.g. from a command-line override.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, MarketplaceError> {
        self.base_url = validate_base_url(base_url)?;
        Ok(self)
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.base_url.clone(),
            timeout: self.timeout,
            token: self.token.clone(),
        }
    }

    /// Builds the HTTP client described by this configuration.
    pub fn connect(&self) -> Result<Client, MarketplaceError> {
        tracing::debug!(base_url = %self.base_url, "Building API client");
        Ok(Client::with_options(self.client_options())?)
    }
}

fn validate_base_url(raw: &str) -> Result<String, MarketplaceError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| {
        MarketplaceError::Config(format!(
            "{} must be an http(s) URL, got '{}': {}",
            API_URL_VAR, raw, reason
        ))
    };
    let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, "http://localhost:3005");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            (API_URL_VAR, "https://api.example.com/"),
            (TIMEOUT_VAR, "5"),
            (TOKEN_VAR, " abc "),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.token.as_deref(), Some("abc"));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config =
            Config::from_lookup(lookup(&[(API_URL_VAR, ""), (TOKEN_VAR, "  ")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.token, None);
    }

    #[test]
    fn invalid_timeout_falls_back() {
        let config = Config::from_lookup(lookup(&[(TIMEOUT_VAR, "soon")])).unwrap();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        let config = Config::from_lookup(lookup(&[(TIMEOUT_VAR, "0")])).unwrap();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = Config::from_lookup(lookup(&[(API_URL_VAR, "localhost:3005")]));
        assert!(matches!(result, Err(MarketplaceError::Config(_))));
        assert!(Config::default().with_base_url("http://").is_err());
        for bad in ["http://bad host:abc", "http://example.com:99999", "ftp://example.com", "/api"] {
            assert!(
                matches!(
                    Config::default().with_base_url(bad),
                    Err(MarketplaceError::Config(_))
                ),
                "{} should be rejected",
                bad
            );
        }
        assert_eq!(
            Config::default()
                .with_base_url("https://api.example.com/v1/")
                .unwrap()
                .base_url,
            "https://api.example.com/v1"
        );
        assert_eq!(
            Config::default()
                .with_base_url("http://10.0.0.2:8080")
                .unwrap()
                .base_url,
            "http://10.0.0.2:8080"
        );
    }
}

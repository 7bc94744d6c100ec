//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | API_ROOT | (required) | Root URL every resource path is appended to |
//! | API_USER_AGENT | resource-client/{version} | `User-Agent` of the network transport |

use crate::{ClientError, ClientResult};
use reqwest::Url;

/// Environment variable holding the API root
pub const API_ROOT_ENV: &str = "API_ROOT";

/// Environment variable overriding the user agent
pub const USER_AGENT_ENV: &str = "API_USER_AGENT";

const DEFAULT_USER_AGENT: &str = concat!("resource-client/", env!("CARGO_PKG_VERSION"));

/// Client configuration for connecting to the REST API
///
/// Passed explicitly to each transport; nothing is read from globals after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root URL (e.g., "https://api.example.com/v1"), no trailing slash
    pub api_root: String,

    /// `User-Agent` header value
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration for the given API root
    pub fn new(api_root: impl Into<String>) -> Self {
        Self {
            api_root: api_root.into().trim_end_matches('/').to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Load from the process environment (`API_ROOT`, `API_USER_AGENT`)
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let api_root = lookup(API_ROOT_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ClientError::Config(format!("{} is not set", API_ROOT_ENV)))?;

        let mut config = Self::new(api_root.trim());
        if let Some(agent) = lookup(USER_AGENT_ENV).filter(|v| !v.is_empty()) {
            config.user_agent = agent;
        }
        config.validate()?;
        Ok(config)
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Check that the root is an absolute http(s) URL
    pub fn validate(&self) -> ClientResult<Url> {
        let url = Url::parse(&self.api_root).map_err(|e| {
            ClientError::Config(format!("invalid API root '{}': {}", self.api_root, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ClientError::Config(format!(
                "unsupported scheme '{}' in API root",
                other
            ))),
        }
    }

    /// Full URL of a path relative to the API root
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("https://api.test/");
        assert_eq!(config.api_root, "https://api.test");
        assert_eq!(config.url_for("salas/2/10"), "https://api.test/salas/2/10");
        assert_eq!(config.url_for("/salas/list"), "https://api.test/salas/list");
    }

    #[test]
    fn test_from_lookup() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("API_ROOT", "https://api.test/v1/"),
            ("API_USER_AGENT", "backoffice/2"),
        ]))
        .unwrap();

        assert_eq!(config.api_root, "https://api.test/v1");
        assert_eq!(config.user_agent, "backoffice/2");
    }

    #[test]
    fn test_missing_api_root() {
        let err = ClientConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));

        let err = ClientConfig::from_lookup(lookup(&[("API_ROOT", "  ")])).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_bad_roots() {
        assert!(ClientConfig::new("not a url").validate().is_err());
        assert!(ClientConfig::new("ftp://api.test").validate().is_err());
        assert!(ClientConfig::new("http://localhost:8080").validate().is_ok());
    }
}

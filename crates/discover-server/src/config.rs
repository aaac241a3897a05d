//! Node configuration.

use crate::error::{Error, Result};
use discover_geocode::{NominatimClient, RegionBias, Url};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Discover node configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoverConfig {
    /// HTTP API listen address
    pub api_addr: SocketAddr,

    /// Content snapshot (JSON array of items). Empty store when unset.
    pub content_path: Option<PathBuf>,

    /// Base URL of the web application, used for redirects
    pub app_url: String,

    /// Geocoding search endpoint
    pub geocode_url: String,

    /// User agent sent to the geocoding service
    pub user_agent: String,

    /// Locality appended to searches
    pub bias: RegionBias,
}

impl Default for DiscoverConfig {
    fn default() -> Self {
        Self {
            api_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            content_path: None,
            app_url: "http://localhost:5000".to_string(),
            geocode_url: NominatimClient::DEFAULT_ENDPOINT.to_string(),
            user_agent: NominatimClient::DEFAULT_USER_AGENT.to_string(),
            bias: RegionBias::lisboa(),
        }
    }
}

impl DiscoverConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_addr = match var("DISCOVER_API_ADDR") {
            Some(addr) => addr
                .parse()
                .map_err(|e| Error::Config(format!("DISCOVER_API_ADDR {:?}: {}", addr, e)))?,
            None => defaults.api_addr,
        };

        let content_path = var("DISCOVER_CONTENT_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let app_url = var("DISCOVER_APP_URL").unwrap_or(defaults.app_url);
        Url::parse(&app_url)
            .map_err(|e| Error::Config(format!("DISCOVER_APP_URL {:?}: {}", app_url, e)))?;

        let geocode_url = var("DISCOVER_GEOCODE_URL").unwrap_or(defaults.geocode_url);
        let user_agent = var("DISCOVER_USER_AGENT").unwrap_or(defaults.user_agent);

        let bias = match (var("DISCOVER_BIAS_TOKEN"), var("DISCOVER_BIAS_SUFFIX")) {
            (None, None) => defaults.bias,
            (Some(token), None) => RegionBias::new(token.clone(), token),
            (token, Some(suffix)) => {
                let token = token.unwrap_or_else(|| suffix.clone());
                RegionBias::new(token, suffix)
            }
        };

        Ok(Self {
            api_addr,
            content_path,
            app_url,
            geocode_url,
            user_agent,
            bias,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<DiscoverConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DiscoverConfig::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn unset_vars_give_defaults() {
        assert_eq!(config(&[]).unwrap(), DiscoverConfig::default());
    }

    #[test]
    fn vars_override_defaults() {
        let config = config(&[
            ("DISCOVER_API_ADDR", "127.0.0.1:9090"),
            ("DISCOVER_CONTENT_PATH", "/srv/discover/contents.json"),
            ("DISCOVER_APP_URL", "https://discover.example"),
            ("DISCOVER_GEOCODE_URL", "http://127.0.0.1:7070/search"),
            ("DISCOVER_BIAS_TOKEN", "Porto"),
            ("DISCOVER_BIAS_SUFFIX", "Porto, Portugal"),
        ])
        .unwrap();

        assert_eq!(config.api_addr, "127.0.0.1:9090".parse().unwrap());
        assert_eq!(
            config.content_path,
            Some(PathBuf::from("/srv/discover/contents.json"))
        );
        assert_eq!(config.app_url, "https://discover.example");
        assert_eq!(config.geocode_url, "http://127.0.0.1:7070/search");
        assert_eq!(config.bias, RegionBias::new("Porto", "Porto, Portugal"));
    }

    #[test]
    fn token_alone_is_its_own_suffix() {
        let config = config(&[("DISCOVER_BIAS_TOKEN", "Sintra")]).unwrap();
        assert_eq!(config.bias, RegionBias::new("Sintra", "Sintra"));
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(matches!(
            config(&[("DISCOVER_API_ADDR", "nowhere")]),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            config(&[("DISCOVER_APP_URL", "localhost")]),
            Err(Error::Config(_))
        ));
    }
}

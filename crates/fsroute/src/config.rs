// File: src/config.rs
// Purpose: Configuration parsing from fsroute.toml

use anyhow::{Context, Result};
use fsroute_router::NamingRules;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Directory containing route files (default: "routes")
    #[serde(default = "default_routes_dir")]
    pub routes_dir: String,

    /// Recognized route file extensions, in middleware preference order
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Base path for all routes (e.g., "/api")
    #[serde(default)]
    pub base_path: Option<String>,
}

// Default values
fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_routes_dir() -> String {
    "routes".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["rs".to_string()]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            routes_dir: default_routes_dir(),
            extensions: default_extensions(),
            base_path: None,
        }
    }
}

impl RoutingConfig {
    pub fn naming_rules(&self) -> NamingRules {
        NamingRules::new(self.extensions.iter().cloned())
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./fsroute.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("fsroute.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.routing.routes_dir, "routes");
        assert_eq!(config.routing.extensions, vec!["rs"]);
        assert!(config.routing.base_path.is_none());
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.routing.routes_dir, "routes");
    }

    #[test]
    fn test_custom_routing() {
        let toml = r#"
            [routing]
            routes_dir = "src/routes"
            extensions = ["route", "rs"]
            base_path = "/api"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.routing.routes_dir, "src/routes");
        assert_eq!(config.routing.base_path.as_deref(), Some("/api"));
        assert_eq!(
            config.routing.naming_rules().middleware_candidates(),
            vec!["_middleware.route", "_middleware.rs"]
        );
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("fsroute.toml")).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fsroute.toml");
        fs::write(&path, "[server]\nport = \"not a number\"").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}

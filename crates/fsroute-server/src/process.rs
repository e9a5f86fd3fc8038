// File: src/process.rs
// Purpose: Process types and their configuration
//
// - PROCESS_TYPE=main (default): main API server, routes/
// - PROCESS_TYPE=admin: admin server, routes-admin/
// - PROCESS_TYPE=worker: background worker, no HTTP server

use anyhow::{Context, Result};
use fsroute::Config;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessType {
    Main,
    Admin,
    Worker,
}

impl FromStr for ProcessType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "main" => Ok(ProcessType::Main),
            "admin" => Ok(ProcessType::Admin),
            "worker" => Ok(ProcessType::Worker),
            other => anyhow::bail!("Unknown PROCESS_TYPE: {}", other),
        }
    }
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProcessType::Main => "main",
            ProcessType::Admin => "admin",
            ProcessType::Worker => "worker",
        })
    }
}

/// Everything that differs between process types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessConfig {
    pub kind: ProcessType,
    pub name: &'static str,
    pub host: String,
    /// 0 for processes without an HTTP server
    pub port: u16,
    pub enable_docs: bool,
    pub enable_static: bool,
    /// Routes directory relative to the crate root
    pub routes_dir: Option<&'static str>,
}

impl ProcessConfig {
    pub fn new(kind: ProcessType, host: impl Into<String>, main_port: u16, admin_port: u16) -> Self {
        let host = host.into();
        match kind {
            ProcessType::Main => Self {
                kind,
                name: "Main API Server",
                host,
                port: main_port,
                enable_docs: true,
                enable_static: true,
                routes_dir: Some("routes"),
            },
            ProcessType::Admin => Self {
                kind,
                name: "Admin Server",
                host,
                port: admin_port,
                enable_docs: true,
                enable_static: false,
                routes_dir: Some("routes-admin"),
            },
            ProcessType::Worker => Self {
                kind,
                name: "Worker Process",
                host,
                port: 0,
                enable_docs: false,
                enable_static: false,
                routes_dir: None,
            },
        }
    }

    /// Reads PROCESS_TYPE, PORT and ADMIN_PORT, falling back to the config file
    pub fn from_env(config: &Config) -> Result<Self> {
        Self::from_lookup(config, |key| std::env::var(key).ok())
    }

    fn from_lookup(config: &Config, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let kind: ProcessType = lookup("PROCESS_TYPE").unwrap_or_default().parse()?;

        let main_port = match lookup("PORT") {
            Some(port) => port.parse().with_context(|| format!("Invalid PORT: {}", port))?,
            None => config.server.port,
        };
        let admin_port = match lookup("ADMIN_PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("Invalid ADMIN_PORT: {}", port))?,
            None => main_port.saturating_add(1),
        };

        Ok(Self::new(kind, config.server.host.clone(), main_port, admin_port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<ProcessConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ProcessConfig::from_lookup(&Config::default(), |key| vars.get(key).cloned())
    }

    #[rstest]
    #[case("main", ProcessType::Main)]
    #[case("ADMIN", ProcessType::Admin)]
    #[case(" worker ", ProcessType::Worker)]
    #[case("", ProcessType::Main)]
    fn test_parse_process_type(#[case] input: &str, #[case] expected: ProcessType) {
        assert_eq!(input.parse::<ProcessType>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_process_type() {
        let err = from_vars(&[("PROCESS_TYPE", "cron")]).unwrap_err();
        assert!(err.to_string().contains("Unknown PROCESS_TYPE"));
    }

    #[test]
    fn test_defaults_to_main_on_config_port() {
        let config = from_vars(&[]).unwrap();
        assert_eq!(config.kind, ProcessType::Main);
        assert_eq!(config.port, 3000);
        assert_eq!(config.routes_dir, Some("routes"));
        assert!(config.enable_static);
    }

    #[test]
    fn test_admin_port() {
        let config = from_vars(&[("PROCESS_TYPE", "admin"), ("PORT", "8000")]).unwrap();
        assert_eq!(config.port, 8001);
        assert!(!config.enable_static);

        let config = from_vars(&[("PROCESS_TYPE", "admin"), ("ADMIN_PORT", "9100")]).unwrap();
        assert_eq!(config.port, 9100);
    }

    #[test]
    fn test_worker_has_no_server() {
        let config = from_vars(&[("PROCESS_TYPE", "worker")]).unwrap();
        assert_eq!(config.port, 0);
        assert_eq!(config.routes_dir, None);
    }
}

// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub bundler: BundlerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    /// Bearer token → owner id. Sessions require a resolved owner;
    /// generation endpoints are open.
    #[serde(default)]
    pub owners: HashMap<String, String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8787,
            owners: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Model id on the Gemini generateContent endpoint.
    pub model: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Per-request timeout in seconds. A stuck upstream call must not
    /// block other requests.
    pub timeout_seconds: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".into(),
            api_key_env: "GEMINI_API_KEY".into(),
            timeout_seconds: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundlerConfig {
    /// External build toolchain binary.
    pub command: String,
    /// Arguments placed before the entry point.
    pub args: Vec<String>,
    /// Upper bound on concurrent toolchain processes.
    pub max_concurrent: usize,
    /// Override for the workspace root (defaults to the data dir).
    pub workspace_root: Option<PathBuf>,
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self {
            command: "esbuild".into(),
            args: vec![
                "--bundle".into(),
                "--loader:.jsx=jsx".into(),
                "--jsx=automatic".into(),
                "--format=iife".into(),
            ],
            max_concurrent: 2,
            workspace_root: None,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reasonable() {
        let c = Config::default();
        assert_eq!(c.server.port, 8787);
        assert!(c.server.owners.is_empty());
        assert_eq!(c.provider.model, "gemini-1.5-flash");
        assert_eq!(c.bundler.command, "esbuild");
        assert_eq!(c.bundler.max_concurrent, 2);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let c: Config = toml::from_str(
            r#"
            [server]
            port = 9000

            [server.owners]
            "tok-abc" = "user-1"
            "#,
        )
        .unwrap();
        assert_eq!(c.server.port, 9000);
        assert_eq!(c.server.owners.get("tok-abc").unwrap(), "user-1");
        // Untouched sections keep their defaults
        assert_eq!(c.provider.timeout_seconds, 60);
        assert_eq!(c.bundler.command, "esbuild");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let c: Config = toml::from_str("").unwrap();
        assert_eq!(c.server.port, Config::default().server.port);
    }
}

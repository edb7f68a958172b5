//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. Built-in defaults
//! 2. User config: `~/.config/cinegraph/config.toml` (XDG) or platform config dir
//! 3. Project config: `.cinegraph.toml`
//! 4. Environment variables: `CINEGRAPH_*` (e.g. `CINEGRAPH_NEO4J_HOST`)
//!
//! # Example
//!
//! ```toml
//! [neo4j]
//! proto = "bolt"
//! host = "db.internal"
//! port = 7687
//! user = "neo4j"
//! password = "secret"
//!
//! [log]
//! level = "info"
//! format = "json"
//! ```

use std::ops::Deref;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub neo4j: Neo4jConfig,
    pub log: LogConfig,
}

/// Neo4j connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Neo4jConfig {
    /// URI scheme (`bolt`, `neo4j`, ...).
    pub proto: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}

impl Default for Neo4jConfig {
    fn default() -> Self {
        Self {
            proto: "bolt".to_string(),
            host: "localhost".to_string(),
            port: 7687,
            user: "neo4j".to_string(),
            password: "test".to_string(),
        }
    }
}

impl Neo4jConfig {
    /// Returns the connection URI: `<proto>://<host>:<port>`.
    pub fn uri(&self) -> String {
        format!("{}://{}:{}", self.proto, self.host, self.port)
    }
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level: `debug`, `info`, `warning`, `error` or `fatal`.
    pub level: String,
    /// Output format: `console` or `json` (`logstash` is an alias).
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            format: "console".to_string(),
        }
    }
}

impl Config {
    /// Load config with layered resolution (defaults → user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(
            Figment::new()
                // Layer 1: User config (lowest priority)
                .merge(Toml::file(Self::user_config_path()))
                // Layer 2: Project config
                .merge(Toml::file(".cinegraph.toml"))
                // Layer 3: Environment variables (highest priority)
                .merge(Env::prefixed("CINEGRAPH_").split("_")),
        )
    }

    /// Extracts a config from an already assembled figment.
    ///
    /// Keys missing from every provider fall back to the built-in defaults.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        figment.extract().map_err(ConfigError::from)
    }

    /// User config path: ~/.config/cinegraph/config.toml (XDG) or platform config dir.
    fn user_config_path() -> std::path::PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("cinegraph").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("cinegraph").join("config.toml"))
            .unwrap_or_default()
    }
}

//! Server configuration read from the environment.
//!
//! | Variable          | Default   |
//! |-------------------|-----------|
//! | `HOST`            | `0.0.0.0` |
//! | `PORT`            | `8000`    |
//! | `ACTIVITIES_SEED` | built-in activity list |
//! | `STATIC_DIR`      | `static`  |

use std::path::PathBuf;

use thiserror::Error;

use crate::roster::{load_seed_file, Roster, SeedError};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Invalid configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Settings for the `server` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seed file replacing the built-in activities.
    pub seed_path: Option<PathBuf>,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_path: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    /// Read settings from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, treating empty values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(host) = get("HOST") {
            config.host = host;
        }
        if let Some(port) = get("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort {
                    value: port.clone(),
                    source,
                })?;
        }
        config.seed_path = get("ACTIVITIES_SEED").map(PathBuf::from);
        if let Some(dir) = get("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        Ok(config)
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Build the roster from the seed file, or the built-in list when none is set.
    pub fn load_roster(&self) -> Result<Roster, SeedError> {
        match &self.seed_path {
            Some(path) => load_seed_file(path),
            None => Ok(Roster::seeded()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.load_roster().unwrap().len(), 9);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", " 9090 "),
            ("ACTIVITIES_SEED", "/etc/mergington/activities.yaml"),
            ("STATIC_DIR", "/srv/www"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert_eq!(
            config.seed_path,
            Some(PathBuf::from("/etc/mergington/activities.yaml"))
        );
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config =
            ServerConfig::from_lookup(lookup(&[("PORT", ""), ("ACTIVITIES_SEED", "  ")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.seed_path, None);
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("eighty"));
        assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
    }

    #[test]
    fn test_missing_seed_file_fails_load() {
        let config = ServerConfig {
            seed_path: Some(PathBuf::from("/definitely/not/here.yaml")),
            ..ServerConfig::default()
        };
        assert!(matches!(config.load_roster(), Err(SeedError::Io { .. })));
    }
}

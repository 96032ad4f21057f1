use crate::client::DEFAULT_CLIENT;
use crate::error::{RediscsError, Result};
use directories::ProjectDirs;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Overrides the platform config directory.
pub const CONFIG_DIR_ENV: &str = "REDIS_CLI_CS_CONFIG_DIR";

/// Configuration for redis-cli-cs, stored in <config dir>/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RediscsConfig {
    /// Client program to launch (e.g. "redis-cli", "valkey-cli")
    #[serde(default = "default_client")]
    pub client: String,

    /// Print the "Executing..." line before launching the client
    #[serde(default = "default_echo_command")]
    pub echo_command: bool,
}

fn default_client() -> String {
    DEFAULT_CLIENT.to_string()
}

fn default_echo_command() -> bool {
    true
}

impl Default for RediscsConfig {
    fn default() -> Self {
        Self {
            client: default_client(),
            echo_command: default_echo_command(),
        }
    }
}

impl RediscsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        debug!("Loading config from {}", config_path.display());
        let content = fs::read_to_string(&config_path).map_err(RediscsError::Io)?;
        let config: RediscsConfig =
            serde_json::from_str(&content).map_err(RediscsError::Serialization)?;
        Ok(config)
    }

    /// Loads from [`config_dir`], falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        let Some(dir) = config_dir() else {
            debug!("No config directory available, using defaults");
            return Self::default();
        };

        Self::load(&dir).unwrap_or_else(|e| {
            warn!("Ignoring config in {}: {}", dir.display(), e);
            Self::default()
        })
    }
}

/// `$REDIS_CLI_CS_CONFIG_DIR` if set, otherwise the platform config directory.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "redis-cli-cs", "redis-cli-cs")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RediscsConfig::default();
        assert_eq!(config.client, "redis-cli");
        assert!(config.echo_command);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = RediscsConfig::load(temp.path()).unwrap();
        assert_eq!(config, RediscsConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "client": "valkey-cli", "echo_command": false }"#,
        )
        .unwrap();

        let config = RediscsConfig::load(temp.path()).unwrap();
        assert_eq!(config.client, "valkey-cli");
        assert!(!config.echo_command);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{ "echo_command": false }"#).unwrap();

        let config = RediscsConfig::load(temp.path()).unwrap();
        assert_eq!(config.client, "redis-cli");
        assert!(!config.echo_command);
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "not json").unwrap();

        let err = RediscsConfig::load(temp.path()).unwrap_err();
        assert!(matches!(err, RediscsError::Serialization(_)));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = RediscsConfig {
            client: "/usr/local/bin/redis-cli".to_string(),
            echo_command: false,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: RediscsConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}

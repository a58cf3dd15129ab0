//! Configuration loading and defaults.
//!
//! Every adapter that talks to an external service takes its settings from
//! [`OpsConfig`], which is read from `.opskit.config.json` in the working
//! directory (or a path given with `--config`). Missing file or missing
//! fields fall back to local-development defaults, so the tool works out of
//! the box against services on localhost.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_broker_servers() -> String {
    "localhost:9092".to_string()
}

fn default_cache_url() -> String {
    "redis://127.0.0.1:6379/".to_string()
}

fn default_env_file() -> PathBuf {
    PathBuf::from(".env")
}

fn default_probe_timeout_ms() -> u64 {
    1000
}

fn default_check_timeout_ms() -> u64 {
    2000
}

/// Top-level configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpsConfig {
    /// Message broker connection settings
    #[serde(default)]
    pub broker: BrokerConfig,

    /// Key-value cache connection settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Object storage and secret store settings
    #[serde(default)]
    pub aws: AwsConfig,

    /// Environment file handling
    #[serde(default)]
    pub env: EnvConfig,

    /// Network probe tuning
    #[serde(default)]
    pub net: NetConfig,
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            broker: BrokerConfig::default(),
            cache: CacheConfig::default(),
            aws: AwsConfig::default(),
            env: EnvConfig::default(),
            net: NetConfig::default(),
        }
    }
}

impl OpsConfig {
    /// Load config from a JSON file.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file.
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Message broker (Kafka) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokerConfig {
    /// Comma-separated bootstrap server list
    #[serde(default = "default_broker_servers")]
    pub servers: String,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            servers: default_broker_servers(),
        }
    }
}

/// Key-value cache (Redis) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Connection URL, including database number
    #[serde(default = "default_cache_url")]
    pub url: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: default_cache_url(),
        }
    }
}

/// AWS client settings shared by object storage and the secret store.
///
/// Credentials are never stored here. The SDK resolves them through its
/// usual chain (environment, shared credentials file, instance metadata).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AwsConfig {
    /// Region override; unset means the SDK's own resolution applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Endpoint override for localstack-style setups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
}

impl AwsConfig {
    /// Resolve an SDK config through the default chain, applying any
    /// region or endpoint overrides from this section.
    pub async fn load(&self) -> aws_config::SdkConfig {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        if let Some(endpoint) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        loader.load().await
    }
}

/// Environment file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Dotenv file consulted by the `env` commands
    #[serde(default = "default_env_file")]
    pub file: PathBuf,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            file: default_env_file(),
        }
    }
}

/// Timeouts for socket-level network probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetConfig {
    /// Per-port timeout during scans, in milliseconds
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,

    /// Timeout for single connectivity checks, in milliseconds
    #[serde(default = "default_check_timeout_ms")]
    pub check_timeout_ms: u64,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            probe_timeout_ms: default_probe_timeout_ms(),
            check_timeout_ms: default_check_timeout_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_localhost() {
        let config = OpsConfig::default();
        assert_eq!(config.broker.servers, "localhost:9092");
        assert_eq!(config.cache.url, "redis://127.0.0.1:6379/");
        assert_eq!(config.env.file, PathBuf::from(".env"));
        assert!(config.aws.region.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let json = r#"{ "broker": { "servers": "kafka.internal:9092" } }"#;
        let config: OpsConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.broker.servers, "kafka.internal:9092");
        assert_eq!(config.cache.url, "redis://127.0.0.1:6379/");
        assert_eq!(config.net.probe_timeout_ms, 1000);
    }

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opskit.config.json");

        let mut config = OpsConfig::default();
        config.aws.region = Some("eu-west-1".to_string());
        config.save(&path).unwrap();

        let back = OpsConfig::load(&path).unwrap();
        assert_eq!(back.aws.region.as_deref(), Some("eu-west-1"));
        assert_eq!(back.broker.servers, "localhost:9092");
    }
}

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::scene::GLOBE_RADIUS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Every section and field has a default, so an absent config file means
/// "talk to the public endpoints".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub snapshots: SnapshotConfig,
    #[serde(default)]
    pub wildfires: WildfireConfig,
    #[serde(default)]
    pub globe: GlobeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

/// Upstream serving the hourly `[lat, lon, alt]` snapshots; also the target
/// the relay forwards to.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotConfig {
    #[serde(default = "default_snapshot_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout", deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WildfireConfig {
    #[serde(default = "default_wildfire_endpoint")]
    pub endpoint: String,
    /// Limit the feed to events from the last N days; upstream default when
    /// omitted.
    #[serde(default)]
    pub days: Option<u32>,
    #[serde(default = "default_timeout", deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlobeConfig {
    #[serde(default = "default_radius")]
    pub radius: f64,
}

fn default_bind() -> String {
    "0.0.0.0:4000".to_string()
}

fn default_snapshot_endpoint() -> String {
    "https://a.windbornesystems.com/treasure".to_string()
}

fn default_wildfire_endpoint() -> String {
    "https://eonet.gsfc.nasa.gov/api/v3/events".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_radius() -> f64 {
    GLOBE_RADIUS
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            endpoint: default_snapshot_endpoint(),
            timeout: default_timeout(),
        }
    }
}

impl Default for WildfireConfig {
    fn default() -> Self {
        Self {
            endpoint: default_wildfire_endpoint(),
            days: None,
            timeout: default_timeout(),
        }
    }
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom)
}

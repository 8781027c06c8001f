//! TOML-based server configuration.

use std::fmt;
use std::fs;
use std::net::IpAddr;
use std::path::Path;

use serde::Deserialize;

/// Top-level server configuration parsed from TOML.
///
/// All fields have defaults; a missing file section falls back to them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Listen address and port.
    #[serde(default)]
    pub server: ListenConfig,
    /// Notification fan-out parameters.
    #[serde(default)]
    pub broadcast: BroadcastConfig,
}

/// Listen address and port.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListenConfig {
    /// Bind address (IPv4 or IPv6).
    pub bind: String,
    /// TCP port.
    pub port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8888,
        }
    }
}

/// Notification fan-out parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BroadcastConfig {
    /// Capacity of the notification channel. A subscriber that falls
    /// further behind than this skips the missed messages.
    pub channel_capacity: usize,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"server.bind"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl ServerConfig {
    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.server.bind.parse::<IpAddr>().is_err() {
            errors.push(ConfigError {
                field: "server.bind".into(),
                message: format!("\"{}\" is not a valid IP address", self.server.bind),
            });
        }
        if self.broadcast.channel_capacity == 0 {
            errors.push(ConfigError {
                field: "broadcast.channel_capacity".into(),
                message: "must be > 0".into(),
            });
        }

        errors
    }
}

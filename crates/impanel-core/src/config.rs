//! Configuration for impanel-core
//!
//! Covers the explore endpoint, the CSRF token, and HTTP transport
//! settings. Configuration is a plain TOML file; every field has a
//! default so a partial file is enough.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Search panel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Explore endpoint criteria are POSTed to. This is the explore
    /// page's own path, so any routing prefix is preserved.
    pub endpoint: String,
    /// CSRF token included in every request body
    pub csrf_token: String,
    /// HTTP transport settings
    pub http: HttpConfig,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000/explore".to_string(),
            csrf_token: String::new(),
            http: HttpConfig::default(),
        }
    }
}

/// HTTP transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: "impanel/0.1".to_string(),
        }
    }
}

impl PanelConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Load from the default location, falling back to defaults when
    /// no file exists
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// The default configuration file location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("impanel")
            .join("config.toml")
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.is_empty() {
            return Err(ConfigError::MissingField("endpoint".to_string()));
        }

        if url::Url::parse(&self.endpoint).is_err() {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }

        if self.http.timeout_secs == 0 {
            return Err(ConfigError::OutOfRange(
                "timeout_secs must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Could not read the configuration file
    Io(String),
    /// Could not parse or serialize TOML
    Parse(String),
    /// Endpoint is not a valid URL
    InvalidEndpoint(String),
    /// Value is out of valid range
    OutOfRange(String),
    /// Required field is missing
    MissingField(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "TOML error: {}", msg),
            ConfigError::InvalidEndpoint(url) => write!(f, "Invalid endpoint URL: {}", url),
            ConfigError::OutOfRange(msg) => write!(f, "Value out of range: {}", msg),
            ConfigError::MissingField(msg) => write!(f, "Missing field: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

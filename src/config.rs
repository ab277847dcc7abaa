//! Configuration types
//!
//! Two layers of configuration exist:
//!
//! - [`Config`]: datasource configuration sent by the caller with every
//!   `GetPage` request and validated before any network call.
//! - [`Settings`]: process-level settings (listening port, HTTP client
//!   timeout), loaded from an optional YAML file and overridden by CLI flags.

use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The only PagerDuty REST API version this adapter speaks
pub const SUPPORTED_API_VERSION: u32 = 2;

// ============================================================================
// Datasource Config
// ============================================================================

/// Datasource configuration supplied with each request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Requested REST API version (defaults to the supported one)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<u32>,
}

/// Structural problems with a caller-supplied [`Config`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Malformed(String),

    #[error(
        "unsupported API version {0}, only version {} is available",
        SUPPORTED_API_VERSION
    )]
    UnsupportedApiVersion(u32),
}

impl Config {
    /// Parse a config from its JSON form. `null` yields the default config.
    pub fn from_value(value: &JsonValue) -> std::result::Result<Self, ConfigError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Self::deserialize(value).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Validate the config fields
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        match self.api_version {
            Some(version) if version != SUPPORTED_API_VERSION => {
                Err(ConfigError::UnsupportedApiVersion(version))
            }
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Process Settings
// ============================================================================

/// Process-level settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Port the server listens on
    pub port: u16,

    /// Timeout for the HTTP client used against the datasource (seconds)
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: 8080,
            timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Parse settings from a YAML string
    pub fn from_yaml_str(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Load settings from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::settings(&display, e.to_string()))?;
        Self::from_yaml_str(&content).map_err(|e| Error::settings(display, e.to_string()))
    }

    /// Load settings from an optional file, falling back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides
    #[must_use]
    pub fn with_overrides(mut self, port: Option<u16>, timeout_secs: Option<u64>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(timeout_secs) = timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        self
    }
}

//! Error types for the PagerDuty adapter
//!
//! This module defines the error taxonomy returned by `GetPage`.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Every variant carries a human-readable message and maps onto exactly one
//! [`ErrorCode`], which is what callers on the other side of the transport see.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Error kind reported to callers of `GetPage`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Caller configuration is structurally invalid or the credential is missing
    InvalidDatasourceConfig,
    /// Unsupported entity kind or child entities requested
    InvalidEntityConfig,
    /// Page request parameters are out of range
    InvalidPageRequestConfig,
    /// Request construction, transport or decoding failure
    Internal,
    /// The datasource answered but the exchange could not be completed
    DatasourceFailed,
    /// The datasource is throttling requests
    DatasourceRateLimited,
    /// The datasource is temporarily unavailable
    DatasourceUnavailable,
    /// The datasource rejected the credential
    DatasourceUnauthorized,
}

/// The main error type for the adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============================================================================
    // Request Validation Errors
    // ============================================================================
    #[error("{message}")]
    InvalidConfig { message: String },

    #[error("{message}")]
    InvalidEntityConfig { message: String },

    #[error("{message}")]
    InvalidPageRequestConfig { message: String },

    // ============================================================================
    // Datasource Errors
    // ============================================================================
    #[error("{message}")]
    Internal { message: String },

    #[error("{message}")]
    DatasourceFailed { message: String },

    #[error("{message}")]
    RateLimited {
        message: String,
        retry_after: Option<Duration>,
    },

    #[error("{message}")]
    Unavailable {
        message: String,
        retry_after: Option<Duration>,
    },

    #[error("{message}")]
    Unauthorized { message: String },

    // ============================================================================
    // Process Errors
    // ============================================================================
    #[error("Failed to load settings from '{path}': {message}")]
    Settings { path: String, message: String },

    #[error("Server error: {message}")]
    Server { message: String },

    #[error("Invalid input: {message}")]
    Input { message: String },
}

impl Error {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid entity config error
    pub fn invalid_entity_config(message: impl Into<String>) -> Self {
        Self::InvalidEntityConfig {
            message: message.into(),
        }
    }

    /// Create an invalid page request error
    pub fn invalid_page_request(message: impl Into<String>) -> Self {
        Self::InvalidPageRequestConfig {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a datasource failure
    pub fn datasource_failed(message: impl Into<String>) -> Self {
        Self::DatasourceFailed {
            message: message.into(),
        }
    }

    /// Create a settings error
    pub fn settings(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Settings {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    /// Error kind surfaced to the caller
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidConfig { .. } => ErrorCode::InvalidDatasourceConfig,
            Error::InvalidEntityConfig { .. } => ErrorCode::InvalidEntityConfig,
            Error::InvalidPageRequestConfig { .. } => ErrorCode::InvalidPageRequestConfig,
            Error::DatasourceFailed { .. } => ErrorCode::DatasourceFailed,
            Error::RateLimited { .. } => ErrorCode::DatasourceRateLimited,
            Error::Unavailable { .. } => ErrorCode::DatasourceUnavailable,
            Error::Unauthorized { .. } => ErrorCode::DatasourceUnauthorized,
            Error::Internal { .. }
            | Error::Settings { .. }
            | Error::Server { .. }
            | Error::Input { .. } => ErrorCode::Internal,
        }
    }

    /// Retry hint extracted from the datasource, if any
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::RateLimited { retry_after, .. } | Error::Unavailable { retry_after, .. } => {
                *retry_after
            }
            _ => None,
        }
    }

    /// Check if the caller may retry this request later
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::RateLimited { .. } | Error::Unavailable { .. })
    }
}

/// Result type alias for the adapter
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_config("PagerDuty auth is missing required token.");
        assert_eq!(err.to_string(), "PagerDuty auth is missing required token.");

        let err = Error::settings("adapter.yaml", "missing field");
        assert_eq!(
            err.to_string(),
            "Failed to load settings from 'adapter.yaml': missing field"
        );

        let err = Error::server("address in use");
        assert_eq!(err.to_string(), "Server error: address in use");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::invalid_config("x").code(),
            ErrorCode::InvalidDatasourceConfig
        );
        assert_eq!(
            Error::invalid_entity_config("x").code(),
            ErrorCode::InvalidEntityConfig
        );
        assert_eq!(
            Error::invalid_page_request("x").code(),
            ErrorCode::InvalidPageRequestConfig
        );
        assert_eq!(Error::internal("x").code(), ErrorCode::Internal);
        assert_eq!(
            Error::datasource_failed("x").code(),
            ErrorCode::DatasourceFailed
        );
        assert_eq!(Error::server("x").code(), ErrorCode::Internal);
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::InvalidPageRequestConfig).unwrap();
        assert_eq!(json, "\"INVALID_PAGE_REQUEST_CONFIG\"");

        let code: ErrorCode = serde_json::from_str("\"DATASOURCE_RATE_LIMITED\"").unwrap();
        assert_eq!(code, ErrorCode::DatasourceRateLimited);
    }

    #[test]
    fn test_is_retryable() {
        let limited = Error::RateLimited {
            message: "slow down".to_string(),
            retry_after: Some(Duration::from_secs(30)),
        };
        assert!(limited.is_retryable());
        assert_eq!(limited.retry_after(), Some(Duration::from_secs(30)));

        let unavailable = Error::Unavailable {
            message: "down".to_string(),
            retry_after: None,
        };
        assert!(unavailable.is_retryable());
        assert_eq!(unavailable.retry_after(), None);

        assert!(!Error::internal("x").is_retryable());
        assert!(!Error::datasource_failed("x").is_retryable());
        assert!(!Error::invalid_config("x").is_retryable());
    }
}

//! Error types for procfind

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for procfind operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application.
///
/// Every variant is fatal for the command that produced it. Per-document search
/// failures never reach this type; the search client absorbs them.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Authentication failed: {0}")]
    Authentication(ApiError),

    #[error("Search token exchange failed: {0}")]
    TokenExchange(ApiError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to write report: {0}")]
    Csv(#[from] csv::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// HTTP-level failures talking to the site or the search service
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Credentials were rejected (401)")]
    Unauthorized,

    #[error("Access denied (403)")]
    Forbidden,

    #[error("Endpoint not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Unexpected status code: {0}")]
    UnexpectedStatus(StatusCode),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Problems with the document list supplied by the user
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Input file is missing the required '{0}' column")]
    MissingColumn(String),

    #[error("Input file could not be read: {0}")]
    Malformed(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `procfind init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_error_wraps_cause() {
        let err = Error::Authentication(ApiError::Unauthorized);
        let msg = err.to_string();
        assert!(msg.starts_with("Authentication failed"));
        assert!(msg.contains("401"));
    }

    #[test]
    fn test_token_exchange_error_wraps_cause() {
        let err = Error::TokenExchange(ApiError::InvalidResponse("Status was 'Failed'".into()));
        let msg = err.to_string();
        assert!(msg.contains("token exchange"));
        assert!(msg.contains("Status was 'Failed'"));
    }

    #[test]
    fn test_api_error_unexpected_status() {
        let err = ApiError::UnexpectedStatus(StatusCode::IM_A_TEAPOT);
        assert!(err.to_string().contains("418"));
    }

    #[test]
    fn test_api_error_network() {
        let err = ApiError::Network("Connection refused".to_string());
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_input_error_missing_column() {
        let err: Error = InputError::MissingColumn("DocumentName".to_string()).into();
        assert!(err.to_string().contains("'DocumentName'"));
    }

    #[test]
    fn test_input_error_not_found_shows_path() {
        let err = InputError::NotFound(PathBuf::from("/tmp/docs.csv"));
        assert!(err.to_string().contains("/tmp/docs.csv"));
    }

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound;
        assert!(err.to_string().contains("procfind init"));
    }

    #[test]
    fn test_error_from_config_error() {
        let err: Error = ConfigError::NotFound.into();

        match err {
            Error::Config(ConfigError::NotFound) => (),
            _ => panic!("Expected Error::Config(ConfigError::NotFound)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}

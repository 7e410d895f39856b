//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (file limit > 0, bind address parses)
//! - Check the CORS origin is usable as a header value
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use axum::http::HeaderValue;
use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic violation found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("storage.upload_dir must not be empty")]
    EmptyUploadDir,

    #[error("limits.max_files_per_request must be at least 1")]
    ZeroFileLimit,

    #[error("cors.allowed_origin {0:?} is not a valid origin header value")]
    InvalidOrigin(String),
}

/// Check a configuration for semantic errors, collecting every violation.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.storage.upload_dir.is_empty() {
        errors.push(ValidationError::EmptyUploadDir);
    }

    if config.limits.max_files_per_request == 0 {
        errors.push(ValidationError::ZeroFileLimit);
    }

    if config.cors.allowed_origin.is_empty()
        || HeaderValue::from_str(&config.cors.allowed_origin).is_err()
    {
        errors.push(ValidationError::InvalidOrigin(
            config.cors.allowed_origin.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_all_violations_reported_together() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.storage.upload_dir = String::new();
        config.limits.max_files_per_request = 0;
        config.cors.allowed_origin = "\u{0}".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_bad_bind_address_rejected() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "localhost".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidBindAddress(_)));
    }

    #[test]
    fn test_zero_file_limit_rejected() {
        let mut config = ServerConfig::default();
        config.limits.max_files_per_request = 0;

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::ZeroFileLimit));
    }
}

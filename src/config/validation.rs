//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check the default route is shaped like a canonical path
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ConsoleConfig → Result<(), Vec<ValidationError>>
//! - Whether the default route is actually declared is checked when the console is built

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::ConsoleConfig;
use crate::navigation::GroupKey;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("observability.log_level: unknown level {0:?}")]
    UnknownLogLevel(String),

    #[error("observability.log_format: unknown format {0:?}")]
    UnknownLogFormat(String),

    #[error("navigation.default_route: {0:?} is not of the form group/link")]
    MalformedDefaultRoute(String),
}

/// Validate `config`, collecting every problem found.
pub fn validate_config(config: &ConsoleConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroValue("timeouts.request_secs"));
    }
    if config.views.suspense_timeout_ms == 0 {
        errors.push(ValidationError::ZeroValue("views.suspense_timeout_ms"));
    }
    if config.session.api_key.is_empty() {
        errors.push(ValidationError::Empty("session.api_key"));
    }
    if config.views.placeholder.is_empty() {
        errors.push(ValidationError::Empty("views.placeholder"));
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.observability.log_level.clone()));
    }
    if !LOG_FORMATS.contains(&config.observability.log_format.as_str()) {
        errors.push(ValidationError::UnknownLogFormat(config.observability.log_format.clone()));
    }

    if let Some(route) = &config.navigation.default_route {
        if !is_canonical_shape(route) {
            errors.push(ValidationError::MalformedDefaultRoute(route.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn is_canonical_shape(route: &str) -> bool {
    match route.split_once('/') {
        Some((group, link)) => group.parse::<GroupKey>().is_ok() && !link.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ConsoleConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ConsoleConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.timeouts.request_secs = 0;
        config.session.api_key.clear();
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::ZeroValue("timeouts.request_secs")));
        assert!(errors.contains(&ValidationError::Empty("session.api_key")));
    }

    #[test]
    fn test_default_route_shape() {
        let mut config = ConsoleConfig::default();

        config.navigation.default_route = Some("drivers/main".into());
        assert!(validate_config(&config).is_ok());

        for bad in ["drivers", "reports/main", "drivers/"] {
            config.navigation.default_route = Some(bad.into());
            assert_eq!(
                validate_config(&config),
                Err(vec![ValidationError::MalformedDefaultRoute(bad.into())])
            );
        }
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = ConsoleConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}

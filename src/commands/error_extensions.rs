//! # Error Extensions for Handled
//!
//! This module extends error types from the rest of the crate to implement
//! Handle<UserError> for consistent error property extraction.

use super::errors::UserError;
use crate::config::{BASE_URL_ENV, TIMEOUT_ENV};
use crate::{ConfigError, RemoteError};
use crate::output::OutputError;
use handled::Handle;

/// Implement Handle<UserError> for RemoteError
impl Handle<UserError> for RemoteError {
    fn handle(&self) -> Option<UserError> {
        let usage_hint = match self.status {
            Some(404) => Some(
                "The requested resource was not found. Check the ID and try again.".to_string(),
            ),
            Some(400) => Some("Invalid request. Check your input data and try again.".to_string()),
            Some(401) => Some(
                "Authentication required. Set --auth-token or OS_AUTH_TOKEN.".to_string(),
            ),
            Some(403) => Some(
                "Access forbidden. You may not have permission for this operation.".to_string(),
            ),
            Some(409) => Some(
                "The request conflicts with the current state of the resource.".to_string(),
            ),
            Some(500..=599) => {
                Some("Server error. The service may be temporarily unavailable.".to_string())
            }
            Some(_) => None,
            None => Some(
                "Check that the service is reachable at --base-url or LEASE_URL.".to_string(),
            ),
        };

        Some(UserError {
            message: self.to_string(),
            usage_hint,
        })
    }
}

/// Implement Handle<UserError> for OutputError
impl Handle<UserError> for OutputError {
    fn handle(&self) -> Option<UserError> {
        Some(UserError {
            message: self.to_string(),
            usage_hint: Some("Try a different --output format.".to_string()),
        })
    }
}

/// Implement Handle<UserError> for ConfigError
impl Handle<UserError> for ConfigError {
    fn handle(&self) -> Option<UserError> {
        let usage_hint = match self.setting {
            "timeout" => Some(format!(
                "Set --timeout-secs or {} to a whole number of seconds.",
                TIMEOUT_ENV
            )),
            "base URL" => Some(format!(
                "Set --base-url or {} to a URL such as http://localhost:7777.",
                BASE_URL_ENV
            )),
            _ => None,
        };

        Some(UserError {
            message: self.to_string(),
            usage_hint,
        })
    }
}

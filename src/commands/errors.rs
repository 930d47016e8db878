//! # Command Error Handling
//!
//! This module provides the error types raised by leasectl commands and the
//! user-facing rendering of those errors, using the handled crate for
//! consistent error property extraction.

use handled::Handle;

use crate::RemoteError;
use crate::output::OutputError;

/// User-friendly error information that can be extracted from various error types
#[derive(Debug, Clone)]
pub struct UserError {
    /// The main error message to display to the user
    pub message: String,
    /// Optional usage hint to help the user correct the error
    pub usage_hint: Option<String>,
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Implements Handle<UserError> for itself to allow extraction
impl Handle<UserError> for UserError {
    fn handle(&self) -> Option<UserError> {
        Some(self.clone())
    }
}

/// A missing, extra or invalid command-line argument.
///
/// Raised before any call to the lease service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError {
    /// What was wrong with the arguments
    pub message: String,
    /// The usage text of the command that rejected them
    pub usage: String,
}

impl UsageError {
    /// Creates a usage error for `usage`.
    pub fn new(message: impl Into<String>, usage: &str) -> Self {
        Self {
            message: message.into(),
            usage: usage.to_string(),
        }
    }
}

impl std::fmt::Display for UsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for UsageError {}

impl Handle<UserError> for UsageError {
    fn handle(&self) -> Option<UserError> {
        Some(UserError {
            message: self.message.clone(),
            usage_hint: Some(self.usage.clone()),
        })
    }
}

/// The `--properties` argument was not a JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertiesParseError {
    /// The input string that failed to parse
    pub input: String,
    /// The reason why parsing failed
    pub reason: String,
}

impl std::fmt::Display for PropertiesParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid properties '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for PropertiesParseError {}

impl Handle<UserError> for PropertiesParseError {
    fn handle(&self) -> Option<UserError> {
        Some(UserError {
            message: self.to_string(),
            usage_hint: Some(
                "Properties must be a JSON object, e.g. --properties '{\"key\": \"value\"}'"
                    .to_string(),
            ),
        })
    }
}

/// Everything a contract command can fail with.
#[derive(Debug)]
pub enum CommandError {
    /// Bad command-line arguments.
    Usage(UsageError),
    /// Malformed `--properties`.
    Parse(PropertiesParseError),
    /// The lease service (or the way to it) failed.
    Remote(RemoteError),
    /// The result could not be rendered in the requested `--output` format.
    Output(OutputError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Usage(e) => write!(f, "{}", e),
            CommandError::Parse(e) => write!(f, "{}", e),
            CommandError::Remote(e) => write!(f, "{}", e),
            CommandError::Output(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Usage(e) => Some(e),
            CommandError::Parse(e) => Some(e),
            CommandError::Remote(e) => Some(e),
            CommandError::Output(e) => Some(e),
        }
    }
}

impl From<UsageError> for CommandError {
    fn from(e: UsageError) -> Self {
        CommandError::Usage(e)
    }
}

impl From<PropertiesParseError> for CommandError {
    fn from(e: PropertiesParseError) -> Self {
        CommandError::Parse(e)
    }
}

impl From<RemoteError> for CommandError {
    fn from(e: RemoteError) -> Self {
        CommandError::Remote(e)
    }
}

impl From<OutputError> for CommandError {
    fn from(e: OutputError) -> Self {
        CommandError::Output(e)
    }
}

impl Handle<UserError> for CommandError {
    fn handle(&self) -> Option<UserError> {
        match self {
            CommandError::Usage(e) => e.handle(),
            CommandError::Parse(e) => e.handle(),
            CommandError::Remote(e) => e.handle(),
            CommandError::Output(e) => e.handle(),
        }
    }
}

/// Helper function to extract user-friendly error messages
pub fn extract_user_error<E>(error: &E) -> Option<UserError>
where
    E: Handle<UserError>,
{
    error.handle()
}

/// Enhanced error formatting for CLI output
pub fn format_cli_error<E>(error: &E) -> String
where
    E: Handle<UserError> + std::fmt::Display,
{
    if let Some(user_error) = extract_user_error(error) {
        let mut output = format!("Error: {}", user_error.message);
        if let Some(hint) = user_error.usage_hint {
            output.push_str(&format!("\nHint: {}", hint));
        }
        output
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_error_carries_usage_as_hint() {
        let err = CommandError::from(UsageError::new(
            "show command requires more arguments",
            "Usage: leasectl contract show <uuid>",
        ));
        assert_eq!(
            format_cli_error(&err),
            "Error: show command requires more arguments\nHint: Usage: leasectl contract show <uuid>"
        );
    }

    #[test]
    fn parse_error_message() {
        let err = PropertiesParseError {
            input: "{nope".to_string(),
            reason: "key must be a string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid properties '{nope': key must be a string"
        );
        let rendered = format_cli_error(&CommandError::from(err));
        assert!(rendered.contains("Hint: Properties must be a JSON object"));
    }

    #[test]
    fn remote_error_passes_through_unchanged() {
        let remote = RemoteError::with_status("get contract 1", 404, "not found");
        let err = CommandError::from(remote.clone());
        assert_eq!(err.to_string(), remote.to_string());
        assert!(matches!(err, CommandError::Remote(r) if r == remote));
    }

    #[test]
    fn output_error_carries_format_hint() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CommandError::from(OutputError::Json(json));
        let rendered = format_cli_error(&err);
        assert!(rendered.starts_with("Error: Failed to format JSON: "));
        assert!(rendered.ends_with("\nHint: Try a different --output format."));
    }
}

//! # Shared Command Utilities
//!
//! This module provides shared validation, parsing, and utility functions
//! used across command handlers to reduce code duplication.

use serde_json::{Map, Value};

use crate::commands::errors::{PropertiesParseError, UsageError};

/// Validates both minimum and maximum argument counts.
///
/// # Arguments
/// * `args` - The positional arguments of the command
/// * `min_count` - The minimum number of arguments required
/// * `max_count` - The maximum number of arguments allowed
/// * `command` - The command name for error message
/// * `usage` - The usage string to attach to the error
pub fn validate_args_count(
    args: &[String],
    min_count: usize,
    max_count: usize,
    command: &str,
    usage: &str,
) -> Result<(), UsageError> {
    if let Some(option) = args.iter().find(|arg| arg.starts_with("--")) {
        return Err(UsageError::new(
            format!("{} command does not accept option '{}'", command, option),
            usage,
        ));
    }
    if args.len() < min_count {
        return Err(UsageError::new(
            format!("{} command requires more arguments", command),
            usage,
        ));
    }
    if args.len() > max_count {
        return Err(UsageError::new(
            format!("{} command has too many arguments", command),
            usage,
        ));
    }
    Ok(())
}

/// Checks that a positional uuid names a single resource.
///
/// Empty, `.` and `..` would address the collection or a parent path rather than a contract.
pub fn validate_uuid<'a>(
    uuid: &'a str,
    command: &str,
    usage: &str,
) -> Result<&'a str, UsageError> {
    match uuid.trim() {
        "" => Err(UsageError::new(
            format!("{} command requires a non-empty uuid", command),
            usage,
        )),
        "." | ".." => Err(UsageError::new(
            format!("{} command got invalid uuid '{}'", command, uuid),
            usage,
        )),
        _ => Ok(uuid),
    }
}

/// Rejects free arguments left over after option parsing.
pub fn reject_free_args(free: &[String], command: &str, usage: &str) -> Result<(), UsageError> {
    match free.first() {
        Some(arg) => Err(UsageError::new(
            format!("{} command got unexpected argument '{}'", command, arg),
            usage,
        )),
        None => Ok(()),
    }
}

/// Decodes the `--properties` argument.  No argument means no properties.
///
/// # Returns
/// * `Ok(Map)` - The decoded JSON object
/// * `Err(PropertiesParseError)` - The input was not JSON, or was JSON but not an object
pub fn parse_properties(input: Option<&str>) -> Result<Map<String, Value>, PropertiesParseError> {
    let Some(input) = input else {
        return Ok(Map::new());
    };
    match serde_json::from_str::<Value>(input) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(PropertiesParseError {
            input: input.to_string(),
            reason: format!("expected a JSON object, found {}", json_kind(&other)),
        }),
        Err(e) => Err(PropertiesParseError {
            input: input.to_string(),
            reason: e.to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Converts owned arguments into the borrowed form option parsing wants.
pub fn as_strs(args: &[String]) -> Vec<&str> {
    args.iter().map(String::as_str).collect()
}

/// Macro to generate command dispatcher boilerplate.
macro_rules! dispatch_command {
    ($command_name:expr, $usage:expr, $args:expr, $client:expr, $output_format:expr, {
        $($subcommand:expr => $handler:expr),* $(,)?
    }) => {{
        if $args.is_empty() {
            return Err(crate::commands::errors::UsageError::new(
                format!("{} command requires a subcommand", $command_name),
                $usage,
            )
            .into());
        }

        match $args[0].as_str() {
            $(
                $subcommand => $handler($args, $client, $output_format).await,
            )*
            _ => {
                let available_subcommands = vec![$($subcommand),*];
                Err(crate::commands::errors::UsageError::new(
                    format!(
                        "Unknown {} subcommand '{}'. Available subcommands: {}",
                        $command_name,
                        $args[0],
                        available_subcommands.join(", ")
                    ),
                    $usage,
                )
                .into())
            }
        }
    }};
}

pub(crate) use dispatch_command;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn count_within_bounds() {
        assert!(validate_args_count(&strings(&["9999999"]), 1, 1, "show", "u").is_ok());
    }

    #[test]
    fn count_too_low() {
        let err = validate_args_count(&[], 1, 1, "show", "Usage: show <uuid>").unwrap_err();
        assert_eq!(err.message, "show command requires more arguments");
        assert_eq!(err.usage, "Usage: show <uuid>");
    }

    #[test]
    fn count_too_high() {
        let err = validate_args_count(&strings(&["a", "b"]), 1, 1, "delete", "u").unwrap_err();
        assert_eq!(err.message, "delete command has too many arguments");
    }

    #[test]
    fn options_are_not_positionals() {
        let err = validate_args_count(&strings(&["--long"]), 1, 1, "show", "u").unwrap_err();
        assert!(err.message.contains("'--long'"));
    }

    #[test]
    fn uuid_must_name_a_resource() {
        assert_eq!(validate_uuid("9999999", "show", "u").unwrap(), "9999999");
        let err = validate_uuid("", "show", "u").unwrap_err();
        assert_eq!(err.message, "show command requires a non-empty uuid");
        assert!(validate_uuid("  ", "delete", "u").is_err());
        assert!(validate_uuid("..", "delete", "u").is_err());
        assert!(validate_uuid(".", "show", "u").is_err());
    }

    #[test]
    fn free_args_rejected() {
        assert!(reject_free_args(&[], "list", "u").is_ok());
        let err = reject_free_args(&strings(&["extra"]), "list", "u").unwrap_err();
        assert!(err.message.contains("'extra'"));
    }

    #[test]
    fn properties_default_to_empty() {
        assert_eq!(parse_properties(None).unwrap(), Map::new());
    }

    #[test]
    fn properties_decode_objects() {
        let map = parse_properties(Some(r#"{"cpu": 4, "tags": ["a"]}"#)).unwrap();
        assert_eq!(Value::Object(map), json!({"cpu": 4, "tags": ["a"]}));
    }

    #[test]
    fn malformed_properties_rejected() {
        let err = parse_properties(Some("{not json")).unwrap_err();
        assert_eq!(err.input, "{not json");
    }

    #[test]
    fn non_object_properties_rejected() {
        let err = parse_properties(Some("[1, 2]")).unwrap_err();
        assert_eq!(err.reason, "expected a JSON object, found an array");
    }
}

//! Error types for lease service operations.

/// A failure reported by, or while talking to, the lease service.
///
/// Commands never translate these; they are carried to the process boundary as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    /// The operation that failed, e.g. "get contract 9999999".
    pub operation: String,
    /// The HTTP status, when the service answered at all.
    pub status: Option<u16>,
    /// The service's error body, or the transport/decode failure.
    pub details: String,
}

impl RemoteError {
    /// An error the service answered with.
    pub fn with_status(operation: &str, status: u16, details: &str) -> Self {
        Self {
            operation: operation.to_string(),
            status: Some(status),
            details: if details.is_empty() {
                "No error details".to_string()
            } else {
                details.to_string()
            },
        }
    }

    /// An error raised before a response could be read.
    pub fn new(operation: &str, details: &str) -> Self {
        Self {
            operation: operation.to_string(),
            status: None,
            details: details.to_string(),
        }
    }

    /// True when the service said the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(
                f,
                "{} failed (HTTP {}): {}",
                self.operation, status, self.details
            ),
            None => write!(f, "{} failed: {}", self.operation, self.details),
        }
    }
}

impl std::error::Error for RemoteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_status() {
        let err = RemoteError::with_status("get contract 9999999", 404, "Contract not found");
        assert_eq!(
            err.to_string(),
            "get contract 9999999 failed (HTTP 404): Contract not found"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn empty_body_gets_placeholder() {
        let err = RemoteError::with_status("list contracts", 500, "");
        assert_eq!(err.details, "No error details");
        assert!(!err.is_not_found());
    }

    #[test]
    fn display_without_status() {
        let err = RemoteError::new("list contracts", "connection refused");
        assert_eq!(err.to_string(), "list contracts failed: connection refused");
    }
}

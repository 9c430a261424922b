//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`;
//! no `String` variants at the top level.

/// Top-level error for umbra operations.
#[derive(Debug, thiserror::Error)]
pub enum UmbraError {
    #[error("Storage error")]
    Storage(#[from] StorageError),

    #[error("Invalid theme value")]
    InvalidTheme(#[from] ParseThemeError),
}

/// Fault reported by a preference-store backend.
///
/// Carries the backend's own description (quota exceeded, storage
/// disabled, …) — the caller decides what to do with it; this layer
/// never retries or falls back.
#[derive(Debug, thiserror::Error)]
#[error("storage backend fault: {message}")]
pub struct StorageError {
    /// Backend-provided description of the fault.
    pub message: String,
}

impl StorageError {
    /// Build a fault from any displayable backend error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A string that is neither `"dark"` nor `"light"`.
#[derive(Debug, thiserror::Error)]
#[error("not a theme value: {value:?}")]
pub struct ParseThemeError {
    /// The rejected input.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_storage_error_via_from() {
        let err: UmbraError = StorageError::new("quota exceeded").into();
        assert!(matches!(err, UmbraError::Storage(_)));
    }

    #[test]
    fn should_include_backend_message_in_display() {
        let err = StorageError::new("storage disabled");
        assert_eq!(err.to_string(), "storage backend fault: storage disabled");
    }

    #[test]
    fn should_quote_rejected_value_in_parse_error() {
        let err = ParseThemeError {
            value: "blue".to_string(),
        };
        assert_eq!(err.to_string(), "not a theme value: \"blue\"");
    }
}

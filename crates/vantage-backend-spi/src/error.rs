//! Error surface shared by analytical backend implementations
//!
//! Two error kinds cover the whole SPI:
//! - Unexpected response: the backend answered with something the caller
//!   cannot use, carrying an HTTP-like status code and a detail payload
//! - Not supported: the capability is permanently absent in this backend

use serde_json::Value;

/// Analytical backend error
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Backend answered with an unusable response
    #[error("unexpected response: {message} (status {status_code})")]
    UnexpectedResponse {
        /// Human-readable description
        message: String,
        /// HTTP-like status code
        status_code: u16,
        /// Detail payload returned by the backend
        response_body: Value,
    },

    /// Capability is permanently unavailable in this backend
    #[error("not supported: {0}")]
    NotSupported(String),
}

impl BackendError {
    /// Create an unexpected-response error
    #[inline]
    #[must_use]
    pub fn unexpected_response(
        message: impl Into<String>,
        status_code: u16,
        response_body: Value,
    ) -> Self {
        Self::UnexpectedResponse {
            message: message.into(),
            status_code,
            response_body,
        }
    }

    /// Create a not-supported error
    #[inline]
    #[must_use]
    pub fn not_supported(message: impl Into<String>) -> Self {
        Self::NotSupported(message.into())
    }

    /// Status code carried by an unexpected-response error
    #[inline]
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedResponse { status_code, .. } => Some(*status_code),
            Self::NotSupported(_) => None,
        }
    }

    /// Check if retrying could change the outcome
    ///
    /// Neither kind is transient: unexpected responses come from static
    /// state on the backend side and not-supported is a permanent
    /// capability absence.
    #[inline]
    #[must_use]
    pub fn is_transient(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unexpected_response_display() {
        let err = BackendError::unexpected_response("workspace not found", 404, json!({}));
        assert!(err.to_string().contains("workspace not found"));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn status_code_only_on_unexpected_response() {
        let unexpected = BackendError::unexpected_response("nope", 404, json!({}));
        assert_eq!(unexpected.status_code(), Some(404));

        let unsupported = BackendError::not_supported("not supported");
        assert_eq!(unsupported.status_code(), None);
    }

    #[test]
    fn no_error_is_transient() {
        assert!(!BackendError::unexpected_response("nope", 404, json!({})).is_transient());
        assert!(!BackendError::not_supported("not supported").is_transient());
    }
}

//! Mapping from parsed error envelopes to typed API errors.

use super::*;

/// Parsed `ErrorResponse` envelope.
#[derive(Debug, Clone, Default)]
pub struct ErrorResponse {
    /// Raw `ErrorType` (e.g., "Sender").
    pub error_type: String,
    /// Raw `ErrorCode` text.
    pub error_code: String,
    /// `ErrorMessage` text.
    pub error_message: String,
    /// `RequestAction`, when the API reports it.
    pub request_action: Option<String>,
    /// Entries of the error body.
    pub details: Vec<ApiErrorDetail>,
}

/// Map an error type string to its kind.
pub fn map_error_type(error_type: &str) -> ApiErrorKind {
    match error_type {
        "Sender" => ApiErrorKind::Sender,
        "Platform" => ApiErrorKind::Platform,
        other => ApiErrorKind::Other(other.to_string()),
    }
}

/// Map a parsed error envelope to an [`ApiError`].
///
/// An unreadable error code maps to `0`; the message is kept verbatim.
pub fn map_error_response(response: ErrorResponse) -> ApiError {
    ApiError {
        kind: map_error_type(response.error_type.trim()),
        code: response.error_code.trim().parse().unwrap_or(0),
        message: response.error_message,
        action: response.request_action.filter(|a| !a.is_empty()),
        details: response.details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_error_type() {
        assert_eq!(map_error_type("Sender"), ApiErrorKind::Sender);
        assert_eq!(map_error_type("Platform"), ApiErrorKind::Platform);
        assert_eq!(
            map_error_type("Receiver"),
            ApiErrorKind::Other("Receiver".to_string())
        );
    }

    #[test]
    fn test_map_error_response() {
        let error = map_error_response(ErrorResponse {
            error_type: "Sender".to_string(),
            error_code: "7".to_string(),
            error_message: "E7: Login failed. Signature mismatching".to_string(),
            request_action: Some("GetOrders".to_string()),
            details: Vec::new(),
        });

        assert_eq!(error.kind, ApiErrorKind::Sender);
        assert_eq!(error.code, 7);
        assert_eq!(error.action.as_deref(), Some("GetOrders"));
        assert_eq!(
            error.to_string(),
            "E0007: E7: Login failed. Signature mismatching"
        );
    }

    #[test]
    fn test_unreadable_code_maps_to_zero() {
        let error = map_error_response(ErrorResponse {
            error_type: "Platform".to_string(),
            error_code: "n/a".to_string(),
            error_message: "Unexpected".to_string(),
            request_action: Some(String::new()),
            details: Vec::new(),
        });

        assert_eq!(error.code, 0);
        assert!(error.action.is_none());
    }
}

use thiserror::Error;

/// Everything that can go wrong talking to the backend.
///
/// Pages never show these verbatim; they go through [`ApiError::user_message`]
/// so the backend's own wording wins when it sent one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend answered 401; the session has already been ended.
    #[error("session expired")]
    Unauthorized,
    /// 422 with the per-field messages joined by ", "
    #[error("{0}")]
    Validation(String),
    /// 2xx envelope with `success: false`
    #[error("request rejected: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),
    #[error("server error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message the backend put in its response, if any
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Validation(message) => Some(message.as_str()),
            ApiError::Rejected(Some(message)) => Some(message.as_str()),
            ApiError::Server { message: Some(message), .. } => Some(message.as_str()),
            _ => None,
        }
        .filter(|message| !message.trim().is_empty())
    }

    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::Server { status: 401, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_wins_over_fallback() {
        let err = ApiError::Server { status: 500, message: Some("Stock is locked".to_string()) };
        assert_eq!(err.user_message("Failed to update product"), "Stock is locked");
    }

    #[test]
    fn test_fallback_without_message() {
        assert_eq!(ApiError::Network("offline".into()).user_message("Failed to save"), "Failed to save");
        assert_eq!(ApiError::Rejected(None).user_message("Failed to save"), "Failed to save");
        assert_eq!(
            ApiError::Server { status: 500, message: Some("  ".into()) }.user_message("Failed to save"),
            "Failed to save"
        );
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(ApiError::Server { status: 401, message: None }.is_unauthorized());
        assert!(!ApiError::Validation("Name is required".into()).is_unauthorized());
    }

    #[test]
    fn test_display() {
        let err = ApiError::Server { status: 503, message: None };
        assert_eq!(err.to_string(), "server error 503: no message");
    }
}

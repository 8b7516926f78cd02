use thiserror::Error;

/// Rejection reported by the exchange inside a `success: 0` envelope.
///
/// The message is kept verbatim (e.g. `"no orders"`); callers that need to tell
/// rejections apart match on it directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("API error: {0}")]
    ApiError(#[from] ApiError),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),
}

impl ExchangeError {
    /// The exchange's own message when the request was rejected by the exchange.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::ApiError(err) => Some(err.message()),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::NetworkError(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::DeserializationError(_))
    }
}

impl From<serde_json::Error> for ExchangeError {
    fn from(err: serde_json::Error) -> Self {
        Self::DeserializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message_verbatim() {
        let err = ExchangeError::from(ApiError::new("no orders"));
        assert_eq!(err.api_message(), Some("no orders"));
        assert_eq!(err.to_string(), "API error: no orders");
    }

    #[test]
    fn test_error_kinds_are_distinct() {
        let network = ExchangeError::NetworkError("connection refused".to_string());
        let decode = ExchangeError::DeserializationError("expected value".to_string());

        assert!(network.is_network());
        assert!(!network.is_decode());
        assert!(decode.is_decode());
        assert!(network.api_message().is_none());
        assert!(decode.api_message().is_none());
    }
}

//! Response DTOs for the key-value server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for a successful GET (GET /item?key=...)
#[derive(Debug, Clone, Serialize)]
pub struct ValueResponse {
    /// The stored value
    pub value: String,
}

impl ValueResponse {
    /// Creates a new ValueResponse
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Response body for successful SET and DELETE operations
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Success message
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_response_serialize() {
        let resp = ValueResponse::new("hello");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"value":"hello"}"#);
    }

    #[test]
    fn test_message_response_serialize() {
        let resp = MessageResponse::new("set successful");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"message":"set successful"}"#);
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("something went wrong"));
    }
}

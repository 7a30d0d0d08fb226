//! Request DTOs for the key-value server API
//!
//! Defines the structure of incoming HTTP request bodies. Fields default to
//! empty strings on deserialization so that a missing field and an empty
//! field produce the same validation error.

use serde::Deserialize;

/// Request body for the SET operation (POST /item)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The key to store the value under
    #[serde(default)]
    pub key: String,
    /// The value to store
    #[serde(default)]
    pub value: String,
}

impl SetRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() || self.value.is_empty() {
            return Some("key and value are required fields".to_string());
        }
        None
    }
}

/// Request body for the DELETE operation (DELETE /item)
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteRequest {
    /// The key to delete
    #[serde(default)]
    pub key: String,
}

impl DeleteRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("field 'key' is required".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_request_deserialize() {
        let json = r#"{"key": "test", "value": "hello"}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "test");
        assert_eq!(req.value, "hello");
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_set_request_missing_value() {
        let json = r#"{"key": "test"}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            req.validate().unwrap(),
            "key and value are required fields"
        );
    }

    #[test]
    fn test_set_request_empty_key() {
        let req = SetRequest {
            key: "".to_string(),
            value: "v".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_delete_request_deserialize() {
        let json = r#"{"key": "test"}"#;
        let req: DeleteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "test");
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_delete_request_missing_key() {
        let req: DeleteRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.validate().unwrap(), "field 'key' is required");
    }
}

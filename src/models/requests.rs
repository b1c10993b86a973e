//! Request DTOs for the LRU store API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::models::{MAX_KEY_LENGTH, MAX_VALUE_SIZE};

/// Request body for the PUT operation (PUT /put)
///
/// # Fields
/// - `key`: The key to store the value under
/// - `value`: The value to store (may be empty)
#[derive(Debug, Clone, Deserialize)]
pub struct PutRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    #[serde(default)]
    pub value: String,
}

impl PutRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            ));
        }
        if self.value.len() > MAX_VALUE_SIZE {
            return Some(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            ));
        }
        None
    }
}

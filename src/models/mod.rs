//! Request and Response models for the LRU store API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::PutRequest;
pub use responses::{GetResponse, HealthResponse, PutResponse, StatsResponse};

// == Transport Limits ==
/// Maximum allowed key length in bytes accepted over HTTP
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes accepted over HTTP
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

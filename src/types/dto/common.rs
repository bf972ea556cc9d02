use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Message body used for error responses and delete confirmations
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct DetailResponse {
    /// Human-readable message
    pub detail: String,
}

/// Response model for the health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

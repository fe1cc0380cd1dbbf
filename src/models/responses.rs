use serde::{Deserialize, Serialize};
use crate::models::domain::Advocate;

/// Filters echoed back by the list endpoint, `null` when absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppliedFilters {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
}

/// Response for the advocates list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvocatesResponse {
    pub data: Vec<Advocate>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub filters: Option<AppliedFilters>,
}

/// Response for the seed endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResponse {
    pub success: bool,
    pub advocates: Vec<Advocate>,
    pub count: usize,
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code,
            count: None,
        }
    }
}

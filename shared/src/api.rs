use serde::{Deserialize, Serialize};

use crate::models::ContributionCalendar;

// ============================================================================
// Contributions API Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ContributionsResponse {
    pub year: i32,
    pub calendar: ContributionCalendar,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct YearsResponse {
    /// Selectable years, newest first.
    pub years: Vec<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        error: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

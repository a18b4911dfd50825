//! Shared types for the my-awesome-demo frontend and server.
//!
//! Holds the application identity used by both sides and the JSON
//! bodies returned by the HTTP API.

use serde::{Deserialize, Serialize};

/// Project name shown in the UI and reported by the API.
pub const APP_NAME: &str = "my-awesome-demo";

/// API version reported by `GET /api`.
pub const APP_VERSION: &str = "1.0.0";

/// Response for `GET /api`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
}

impl WelcomeResponse {
    /// Welcome message for this build.
    pub fn current() -> Self {
        Self {
            message: format!("Welcome to {}", APP_NAME),
            version: APP_VERSION.to_string(),
        }
    }
}

/// Response for `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    /// A healthy status report.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            service: APP_NAME.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Error body for failed API requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }

    /// Error with a machine-readable code such as `NOT_FOUND`.
    pub fn with_code(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
        }
    }
}

//! Client-related types shared between the mock server and astro-client
//!
//! Request/response bodies of the backend API that are not list records.

use serde::{Deserialize, Serialize};

use crate::records::UserRecord;

/// Token used when the login response carries none
pub const FALLBACK_TOKEN: &str = "default-secure-token";

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: UserRecord,
}

impl LoginResponse {
    pub fn token(&self) -> String {
        self.user
            .token()
            .unwrap_or_else(|| FALLBACK_TOKEN.to_string())
    }
}

// =============================================================================
// Generic replies
// =============================================================================

/// Error or status body: `{"error": ...}` or `{"message": ...}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MessageBody {
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            error: Some(msg.into()),
            message: None,
        }
    }

    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            error: None,
            message: Some(msg.into()),
        }
    }

    /// The first non-blank of `error`, then `message`
    pub fn text(&self) -> Option<&str> {
        [self.error.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}

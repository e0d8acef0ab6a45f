//! Client error types

use http::StatusCode;
use shared::error::AppError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request could not be sent or the response not read
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the server text, shown verbatim
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Local validation rejected the request before sending
    #[error("{0}")]
    Validation(#[from] AppError),
}

/// The three failure buckets surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Server unreachable, timed out
    Network,
    /// Server answered with an error or something unreadable
    Server,
    /// Rejected locally before any request
    Local,
}

impl ClientError {
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Network(_) => FailureKind::Network,
            Self::Rejected { .. } | Self::InvalidResponse(_) | Self::Serialization(_) => {
                FailureKind::Server
            }
            Self::Io(_) | Self::Validation(_) => FailureKind::Local,
        }
    }

    /// HTTP status for rejected requests
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Network(e) => e.status(),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_rejected_displays_server_text_verbatim() {
        let err = ClientError::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: "Minimal upload 1 gambar".to_string(),
        };
        assert_eq!(err.to_string(), "Minimal upload 1 gambar");
        assert_eq!(err.failure_kind(), FailureKind::Server);
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn test_failure_kinds() {
        let err: ClientError = AppError::new(ErrorCode::RoomImageRequired).into();
        assert_eq!(err.failure_kind(), FailureKind::Local);

        let err: ClientError = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert_eq!(err.failure_kind(), FailureKind::Server);

        let err: ClientError = std::io::Error::other("gone").into();
        assert_eq!(err.failure_kind(), FailureKind::Local);
    }
}

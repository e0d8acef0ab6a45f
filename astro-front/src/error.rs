//! Front-end error type

use astro_client::{ClientError, FailureKind};
use shared::error::AppError;
use shared::search::SearchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontError {
    /// Remote call failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Form or input rejected before any request
    #[error("{0}")]
    Invalid(#[from] AppError),

    /// Availability query rejected
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl FrontError {
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Client(e) => e.failure_kind(),
            Self::Invalid(_) | Self::Search(_) => FailureKind::Local,
        }
    }
}

pub type FrontResult<T> = Result<T, FrontError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::http::StatusCode;

    #[test]
    fn test_server_text_passes_through() {
        let err: FrontError = ClientError::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: "Minimal upload 1 gambar".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Minimal upload 1 gambar");
        assert_eq!(err.failure_kind(), FailureKind::Server);
    }

    #[test]
    fn test_search_error_is_local() {
        let day = NaiveDate::from_ymd_opt(2025, 11, 2).unwrap();
        let err: FrontError = SearchError::InvalidDateRange {
            check_in: day,
            check_out: day,
        }
        .into();
        assert_eq!(err.failure_kind(), FailureKind::Local);
        assert_eq!(err.to_string(), "check-out must be after check-in");
    }
}

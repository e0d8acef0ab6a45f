//! Unified error codes for the Astro front-end
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Room errors
//! - 3xxx: User errors
//! - 4xxx: Search errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they serialize compactly
/// and stay stable across the client, the mock backend and log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// No account with the given email
    EmailNotFound = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Room ====================
    /// Room not found
    RoomNotFound = 2001,
    /// At least one image is required when creating a room
    RoomImageRequired = 2002,
    /// Image upload failed
    RoomUploadFailed = 2003,
    /// Room form payload is malformed
    RoomFormInvalid = 2004,

    // ==================== 3xxx: User ====================
    /// User not found
    UserNotFound = 3001,
    /// Email already registered
    UserEmailExists = 3002,
    /// Password is required for new accounts
    UserPasswordRequired = 3003,

    // ==================== 4xxx: Search ====================
    /// Check-out is not after check-in
    InvalidDateRange = 4001,
    /// No room satisfies the query
    NoRoomsAvailable = 4002,
    /// Room or adult count is zero
    InvalidOccupancy = 4003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Network error
    NetworkError = 9002,
    /// Operation timed out
    TimeoutError = 9003,
    /// Configuration error
    ConfigError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::EmailNotFound => "Email not found",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            // Room
            ErrorCode::RoomNotFound => "Room not found",
            ErrorCode::RoomImageRequired => "At least one room image is required",
            ErrorCode::RoomUploadFailed => "Failed to upload room image",
            ErrorCode::RoomFormInvalid => "Room form data is invalid",

            // User
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::UserEmailExists => "Email is already registered",
            ErrorCode::UserPasswordRequired => "Password is required for new users",

            // Search
            ErrorCode::InvalidDateRange => "Check-out must be after check-in",
            ErrorCode::NoRoomsAvailable => "No rooms are available for these criteria",
            ErrorCode::InvalidOccupancy => "At least one room and one adult are required",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => ErrorCode::Success,
            1 => ErrorCode::Unknown,
            2 => ErrorCode::ValidationFailed,
            3 => ErrorCode::NotFound,
            4 => ErrorCode::AlreadyExists,
            5 => ErrorCode::InvalidRequest,
            6 => ErrorCode::InvalidFormat,
            7 => ErrorCode::RequiredField,
            8 => ErrorCode::ValueOutOfRange,

            1001 => ErrorCode::NotAuthenticated,
            1002 => ErrorCode::InvalidCredentials,
            1003 => ErrorCode::EmailNotFound,
            1004 => ErrorCode::TokenInvalid,

            2001 => ErrorCode::RoomNotFound,
            2002 => ErrorCode::RoomImageRequired,
            2003 => ErrorCode::RoomUploadFailed,
            2004 => ErrorCode::RoomFormInvalid,

            3001 => ErrorCode::UserNotFound,
            3002 => ErrorCode::UserEmailExists,
            3003 => ErrorCode::UserPasswordRequired,

            4001 => ErrorCode::InvalidDateRange,
            4002 => ErrorCode::NoRoomsAvailable,
            4003 => ErrorCode::InvalidOccupancy,

            9001 => ErrorCode::InternalError,
            9002 => ErrorCode::NetworkError,
            9003 => ErrorCode::TimeoutError,
            9004 => ErrorCode::ConfigError,

            _ => return Err(InvalidErrorCode(value)),
        };
        Ok(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

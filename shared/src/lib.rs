//! Shared types for the Astro booking front-end
//!
//! Canonical data model, the API decoding layer that turns loosely named
//! backend records into that model, availability search and list filters,
//! and the unified error system.

pub mod client;
pub mod error;
pub mod models;
pub mod records;
pub mod search;
pub mod validation;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{
    Booking, ImageSource, ImageUpload, PaymentStatus, Role, Room, RoomDraft, RoomId, RoomStatus,
    User, UserDraft, UserId,
};
pub use search::{
    Availability, AvailabilityQuery, Facet, Occupancy, RoomFilter, SearchError, StayQuote,
    UserFilter,
};

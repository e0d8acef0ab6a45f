//! Data models
//!
//! Canonical shapes held by the front-end screens. Loosely named backend
//! records are decoded into these by [`crate::records`].

pub mod booking;
pub mod room;
pub mod user;

// Re-exports
pub use booking::*;
pub use room::*;
pub use user::*;

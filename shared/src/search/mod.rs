//! Room availability search and list filters

mod availability;
mod filter;
mod quote;

pub use availability::{Availability, AvailabilityQuery, Occupancy, SearchError, nights};
pub use filter::{Facet, RoomFilter, UserFilter, contains_ci};
pub use quote::{StayQuote, is_weekend_night, quote};

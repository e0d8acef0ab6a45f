//! Room availability search
//!
//! A query is a date range, a party and a [`RoomFilter`]. The range is
//! checked before any room is looked at, so an invalid range is always a
//! distinct error and never an empty result.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::filter::RoomFilter;
use crate::error::{AppError, ErrorCode};
use crate::models::Room;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("check-out must be after check-in")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("at least one room and one adult are required")]
    EmptyParty,
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match &err {
            SearchError::InvalidDateRange {
                check_in,
                check_out,
            } => AppError::with_message(ErrorCode::InvalidDateRange, err.to_string())
                .with_detail("check_in", check_in.to_string())
                .with_detail("check_out", check_out.to_string()),
            SearchError::EmptyParty => {
                AppError::with_message(ErrorCode::InvalidOccupancy, err.to_string())
            }
        }
    }
}

/// Number of nights between two calendar dates, zero when the range is empty
/// or reversed
pub fn nights(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    let days = (check_out - check_in).num_days();
    u32::try_from(days).unwrap_or(0)
}

/// Requested rooms and guests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    pub rooms: u32,
    pub adults: u32,
    pub children: u32,
}

impl Default for Occupancy {
    fn default() -> Self {
        Self {
            rooms: 1,
            adults: 1,
            children: 0,
        }
    }
}

impl Occupancy {
    /// Adults that have to fit in each requested room, rounded up
    pub fn adults_per_room(&self) -> u32 {
        self.adults.div_ceil(self.rooms.max(1))
    }

    /// A room below the per-room adult count is excluded
    pub fn fits(&self, room: &Room) -> bool {
        room.capacity >= self.adults_per_room()
    }

    /// "2 Kamar, 3 Dewasa, 1 Anak"
    pub fn summary(&self) -> String {
        let mut s = format!("{} Kamar, {} Dewasa", self.rooms, self.adults);
        if self.children > 0 {
            s.push_str(&format!(", {} Anak", self.children));
        }
        s
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub occupancy: Occupancy,
    #[serde(default)]
    pub filter: RoomFilter,
}

impl AvailabilityQuery {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
            occupancy: Occupancy::default(),
            filter: RoomFilter::default(),
        }
    }

    pub fn with_occupancy(mut self, occupancy: Occupancy) -> Self {
        self.occupancy = occupancy;
        self
    }

    pub fn with_filter(mut self, filter: RoomFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Validate the query and return the night count
    pub fn validate(&self) -> Result<u32, SearchError> {
        let n = nights(self.check_in, self.check_out);
        if n == 0 {
            return Err(SearchError::InvalidDateRange {
                check_in: self.check_in,
                check_out: self.check_out,
            });
        }
        if self.occupancy.rooms == 0 || self.occupancy.adults == 0 {
            return Err(SearchError::EmptyParty);
        }
        Ok(n)
    }

    pub fn matches(&self, room: &Room) -> bool {
        self.filter.matches(room) && self.occupancy.fits(room)
    }

    /// Run the search; `rooms` is not touched when the query is invalid
    pub fn search<'a, I>(&self, rooms: I) -> Result<Availability<'a>, SearchError>
    where
        I: IntoIterator<Item = &'a Room>,
    {
        let nights = self.validate()?;
        let rooms = rooms.into_iter().filter(|r| self.matches(r)).collect();
        Ok(Availability { nights, rooms })
    }
}

/// Successful search result; an empty `rooms` is a valid outcome
#[derive(Debug, Clone, PartialEq)]
pub struct Availability<'a> {
    pub nights: u32,
    pub rooms: Vec<&'a Room>,
}

impl Availability<'_> {
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

//! In-memory list filters
//!
//! Filters never fetch; they only narrow an already loaded collection and keep
//! its relative order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{Role, Room, RoomStatus, User};

/// One facet selector: either "all" or a single value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet<T> {
    All,
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Facet<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Facet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(v) => v.fmt(f),
        }
    }
}

impl<T: FromStr> FromStr for Facet<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Case-insensitive substring match; an empty needle matches everything
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Search box plus status and type facets over rooms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomFilter {
    pub search: String,
    pub status: Facet<RoomStatus>,
    pub room_type: Facet<String>,
}

impl RoomFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.status == Facet::All
            && self.room_type == Facet::All
    }

    pub fn matches(&self, room: &Room) -> bool {
        contains_ci(&room.name, &self.search)
            && self.status.admits(&room.status)
            && match &self.room_type {
                Facet::All => true,
                Facet::Only(t) => room.room_type.eq_ignore_ascii_case(t),
            }
    }

    /// Stable filter over borrowed rooms
    pub fn apply<'a, I>(&self, rooms: I) -> Vec<&'a Room>
    where
        I: IntoIterator<Item = &'a Room>,
    {
        rooms.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Search box (name or email) plus role facet over users
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub search: String,
    pub role: Facet<Role>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        (contains_ci(&user.name, &self.search) || contains_ci(&user.email, &self.search))
            && self.role.admits(&user.role)
    }

    pub fn apply<'a, I>(&self, users: I) -> Vec<&'a User>
    where
        I: IntoIterator<Item = &'a User>,
    {
        users.into_iter().filter(|u| self.matches(u)).collect()
    }
}

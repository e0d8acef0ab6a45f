//! Stay pricing
//!
//! A night is charged the weekend rate when it starts on a Friday or a
//! Saturday.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::availability::SearchError;
use crate::models::Room;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayQuote {
    pub weekday_nights: u32,
    pub weekend_nights: u32,
    pub total: Decimal,
}

impl StayQuote {
    pub fn nights(&self) -> u32 {
        self.weekday_nights + self.weekend_nights
    }
}

pub fn is_weekend_night(night: NaiveDate) -> bool {
    matches!(night.weekday(), Weekday::Fri | Weekday::Sat)
}

/// Price one room for the given stay
pub fn quote(room: &Room, check_in: NaiveDate, check_out: NaiveDate) -> Result<StayQuote, SearchError> {
    if check_out <= check_in {
        return Err(SearchError::InvalidDateRange {
            check_in,
            check_out,
        });
    }

    let mut q = StayQuote {
        weekday_nights: 0,
        weekend_nights: 0,
        total: Decimal::ZERO,
    };
    for night in check_in.iter_days().take_while(|d| *d < check_out) {
        if is_weekend_night(night) {
            q.weekend_nights += 1;
            q.total += room.price_weekend;
        } else {
            q.weekday_nights += 1;
            q.total += room.price_weekday;
        }
    }
    Ok(q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoomId, RoomStatus};
    use std::collections::BTreeSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn deluxe() -> Room {
        Room {
            id: RoomId::new("1"),
            name: "Deluxe Mountain View".to_string(),
            room_type: "Villa".to_string(),
            category: String::new(),
            room_number: String::new(),
            description: String::new(),
            bed: "King Bed".to_string(),
            capacity: 2,
            facilities: BTreeSet::new(),
            images: vec![],
            price_weekday: Decimal::new(850_000, 0),
            price_weekend: Decimal::new(1_100_000, 0),
            status: RoomStatus::Available,
            updated_at: None,
        }
    }

    #[test]
    fn test_weekday_only_stay() {
        // Sun 2 Nov 2025 to Wed 5 Nov 2025
        let q = quote(&deluxe(), date(2025, 11, 2), date(2025, 11, 5)).unwrap();
        assert_eq!(q.weekday_nights, 3);
        assert_eq!(q.weekend_nights, 0);
        assert_eq!(q.total, Decimal::new(2_550_000, 0));
    }

    #[test]
    fn test_stay_across_weekend() {
        // Thu 6 Nov to Mon 10 Nov: Thu, Sun weekday; Fri, Sat weekend
        let q = quote(&deluxe(), date(2025, 11, 6), date(2025, 11, 10)).unwrap();
        assert_eq!(q.weekday_nights, 2);
        assert_eq!(q.weekend_nights, 2);
        assert_eq!(q.nights(), 4);
        assert_eq!(q.total, Decimal::new(3_900_000, 0));
    }

    #[test]
    fn test_reversed_range_rejected() {
        assert!(quote(&deluxe(), date(2025, 11, 5), date(2025, 11, 2)).is_err());
    }
}

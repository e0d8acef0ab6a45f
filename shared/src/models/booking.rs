//! Booking Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::search::nights;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Pending,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paid => f.write_str("Paid"),
            Self::Pending => f.write_str("Pending"),
        }
    }
}

/// A guest booking as listed on the "My bookings" page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub room_name: String,
    pub image: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub payment_status: PaymentStatus,
}

impl Booking {
    pub fn nights(&self) -> u32 {
        nights(self.check_in, self.check_out)
    }
}

//! Room Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

/// Image shown when a room has no images of its own
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400";
pub const DEFAULT_ROOM_TYPE: &str = "Glamping";
pub const DEFAULT_BED: &str = "Queen Bed";
pub const DEFAULT_CAPACITY: u32 = 2;

/// Room type vocabulary offered by the forms and the type facet
pub const ROOM_TYPES: [&str; 4] = ["Glamping", "Villa", "Cottage", "Cabin"];

/// Facility checkbox vocabulary
pub const FACILITY_VOCABULARY: [&str; 9] = [
    "AC",
    "WiFi",
    "Private Bathroom",
    "Kitchen",
    "Bathtub",
    "Balcony",
    "TV",
    "Fireplace",
    "Hot Tub",
];

/// Opaque room identifier
///
/// The backend sends string, numeric or `{"$oid": ...}` ids; the decoding
/// layer flattens all of them into this string form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 3] = [Self::Available, Self::Occupied, Self::Maintenance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        }
    }

    /// Status derived from the backend `availability` flag
    pub fn from_availability(available: bool) -> Self {
        if available {
            Self::Available
        } else {
            Self::Maintenance
        }
    }

    /// Badge label used by the admin table
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Tersedia",
            Self::Occupied => "Terisi",
            Self::Maintenance => "Perbaikan",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is outside the fixed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown room status: {0}")]
pub struct UnknownRoomStatus(pub String);

impl FromStr for RoomStatus {
    type Err = UnknownRoomStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" | "tersedia" => Ok(Self::Available),
            "occupied" | "booked" | "terisi" => Ok(Self::Occupied),
            "maintenance" | "perbaikan" => Ok(Self::Maintenance),
            _ => Err(UnknownRoomStatus(s.to_string())),
        }
    }
}

/// Canonical room, as held by the screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub room_type: String,
    pub category: String,
    pub room_number: String,
    pub description: String,
    pub bed: String,
    pub capacity: u32,
    pub facilities: BTreeSet<String>,
    /// Never empty; falls back to [`PLACEHOLDER_IMAGE`]
    pub images: Vec<String>,
    pub price_weekday: Decimal,
    pub price_weekend: Decimal,
    pub status: RoomStatus,
    /// Display only
    pub updated_at: Option<NaiveDate>,
}

impl Room {
    /// First image, used as the card thumbnail
    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Last-updated date formatted for the table, `N/A` when unknown
    pub fn updated_label(&self) -> String {
        self.updated_at
            .map(|d| d.format("%d %b %Y").to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn has_facility(&self, label: &str) -> bool {
        self.facilities.contains(label)
    }
}

/// Image attached to a room draft
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// A local file to be uploaded as a multipart file part
    Upload(ImageUpload),
    /// An already hosted image, sent as a plain text part
    Url(String),
}

/// File contents of an uploaded image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Create/update room payload
///
/// Produced by the room form after validation; the client encodes it as
/// multipart form data.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct RoomDraft {
    #[validate(length(min = 1, message = "Nama kamar wajib diisi"))]
    pub name: String,
    #[validate(length(min = 1, message = "Deskripsi wajib diisi"))]
    pub description: String,
    pub room_number: String,
    pub room_type: String,
    pub category: String,
    #[validate(length(min = 1, message = "Tipe kasur wajib diisi"))]
    pub bed: String,
    #[validate(range(min = 1, message = "Kapasitas minimal 1 orang"))]
    pub capacity: u32,
    #[validate(custom(function = "validate_price"))]
    pub price_weekday: Decimal,
    #[validate(custom(function = "validate_price"))]
    pub price_weekend: Decimal,
    pub status: RoomStatus,
    pub facilities: BTreeSet<String>,
    pub images: Vec<ImageSource>,
}

impl RoomDraft {
    /// True when the draft carries no image at all
    pub fn has_no_images(&self) -> bool {
        self.images.is_empty()
    }
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        let mut err = ValidationError::new("price_negative");
        err.message = Some("Harga tidak boleh negatif".into());
        return Err(err);
    }
    Ok(())
}

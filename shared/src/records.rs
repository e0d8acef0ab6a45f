//! API decoding layer
//!
//! The backend (and older front-end variants) name the same logical field in
//! several ways: `id`/`_id`/`Id`, `Name`/`name`, `price_per_night`/`price`,
//! string or numeric ids, millisecond or RFC 3339 timestamps. Everything is
//! decoded here into loosely typed records whose fields are all optional,
//! then converted into the canonical [`Room`] / [`User`] with fixed defaults.
//! Each spelling is its own field, resolved in order of preference, so a
//! record carrying two spellings of one field still decodes. A missing or
//! oddly typed field never fails the whole record, and a bad element never
//! fails the whole list.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::models::{
    DEFAULT_BED, DEFAULT_CAPACITY, DEFAULT_ROOM_TYPE, PLACEHOLDER_IMAGE, Role, Room, RoomId,
    RoomStatus, User, UserId,
};

pub const DEFAULT_USER_NAME: &str = "Tanpa Nama";
pub const DEFAULT_USER_EMAIL: &str = "-";
pub const DEFAULT_USER_PHONE: &str = "-";

// =============================================================================
// Flexible scalars
// =============================================================================

/// Any JSON scalar; objects and arrays land in `Other` and are ignored
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl Scalar {
    /// Non-blank text form
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Text(s) => {
                let t = s.trim();
                (!t.is_empty()).then(|| t.to_string())
            }
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Bool(_) | Self::Other(_) => None,
        }
    }

    /// Strictly positive count; zero counts as missing
    pub fn positive_u32(&self) -> Option<u32> {
        let n = match self {
            Self::Int(i) => *i,
            Self::Float(f) if f.is_finite() => f.round() as i64,
            Self::Text(s) => s.trim().parse::<i64>().ok()?,
            _ => return None,
        };
        u32::try_from(n).ok().filter(|n| *n > 0)
    }

    pub fn decimal(&self) -> Option<Decimal> {
        match self {
            Self::Int(i) => Some(Decimal::from(*i)),
            Self::Float(f) => Decimal::try_from(*f).ok().map(|d| d.round_dp(2).normalize()),
            Self::Text(s) => Decimal::from_str(s.trim()).ok(),
            _ => None,
        }
    }

    pub fn flag(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(i) => Some(*i != 0),
            Self::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Some(true),
                "false" | "0" | "no" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Epoch milliseconds, RFC 3339 or a bare `YYYY-MM-DD`
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Int(ms) => DateTime::from_timestamp_millis(*ms),
            Self::Float(ms) if ms.is_finite() => DateTime::from_timestamp_millis(*ms as i64),
            Self::Text(s) => {
                let s = s.trim();
                if let Ok(ms) = s.parse::<i64>() {
                    return DateTime::from_timestamp_millis(ms);
                }
                if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                    return Some(dt.with_timezone(&Utc));
                }
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|dt| dt.and_utc())
            }
            _ => None,
        }
    }
}

/// Identifier: plain scalar or a Mongo extended-JSON `{"$oid": ...}`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IdRepr {
    Oid {
        #[serde(rename = "$oid")]
        oid: String,
    },
    Scalar(Scalar),
}

impl IdRepr {
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Oid { oid } => (!oid.trim().is_empty()).then(|| oid.trim().to_string()),
            Self::Scalar(s) => s.text(),
        }
    }
}

/// Timestamp: plain scalar or extended-JSON `{"$date": ...}`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TimeRepr {
    Extended {
        #[serde(rename = "$date")]
        date: Scalar,
    },
    Scalar(Scalar),
}

impl TimeRepr {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Extended { date } => date.timestamp(),
            Self::Scalar(s) => s.timestamp(),
        }
    }
}

/// A label given as a string or as an object with a `name` (or `url`)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Text(String),
    Named {
        name: Option<String>,
        url: Option<String>,
    },
    Other(IgnoredAny),
}

impl Label {
    pub fn text<'a>(&'a self) -> Option<&'a str> {
        let non_blank = |s: &'a str| {
            let t = s.trim();
            (!t.is_empty()).then_some(t)
        };
        match self {
            Self::Text(s) => non_blank(s),
            Self::Named { name, url } => [name, url]
                .into_iter()
                .flatten()
                .find_map(|s| non_blank(s)),
            Self::Other(_) => None,
        }
    }
}

/// A list, or a single value standing in for one
///
/// A single string is treated as a comma-separated list, which is how the
/// free-text facility field used to send it.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListRepr {
    Many(Vec<Label>),
    One(Label),
}

impl ListRepr {
    pub fn labels(&self) -> Vec<String> {
        match self {
            Self::Many(items) => items
                .iter()
                .filter_map(Label::text)
                .map(str::to_string)
                .collect(),
            Self::One(Label::Text(csv)) => csv
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            Self::One(label) => label.text().map(str::to_string).into_iter().collect(),
        }
    }
}

fn first_text<'a>(candidates: impl IntoIterator<Item = &'a Option<IdRepr>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find_map(IdRepr::text)
}

fn scalar_text(value: &Option<Scalar>) -> Option<String> {
    value.as_ref().and_then(Scalar::text)
}

/// First non-blank text among the spellings, in order of preference
fn first_scalar<'a>(candidates: impl IntoIterator<Item = &'a Option<Scalar>>) -> Option<String> {
    candidates.into_iter().find_map(scalar_text)
}

fn first_time<'a>(candidates: impl IntoIterator<Item = &'a Option<TimeRepr>>) -> Option<DateTime<Utc>> {
    candidates
        .into_iter()
        .flatten()
        .find_map(TimeRepr::timestamp)
}

/// Decode each element on its own; elements that are not objects are dropped
fn lenient<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Option<T>>(item) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping undecodable list item");
                None
            }
        })
        .collect()
}

// =============================================================================
// Room
// =============================================================================

/// Room as it arrives from the backend
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RoomRecord {
    pub id: Option<IdRepr>,
    #[serde(rename = "_id")]
    pub mongo_id: Option<IdRepr>,
    #[serde(rename = "Id")]
    pub upper_id: Option<IdRepr>,
    pub name: Option<Scalar>,
    #[serde(rename = "Name")]
    pub upper_name: Option<Scalar>,
    #[serde(rename = "type")]
    pub kind: Option<Scalar>,
    /// Joined room-type documents, or a plain type name
    pub room_type: Option<ListRepr>,
    pub category: Option<Scalar>,
    pub room_number: Option<Scalar>,
    #[serde(rename = "roomNumber")]
    pub room_number_camel: Option<Scalar>,
    pub description: Option<Scalar>,
    pub bed_type: Option<Scalar>,
    pub bed: Option<Scalar>,
    pub capacity: Option<Scalar>,
    pub facilities: Option<ListRepr>,
    pub images: Option<ListRepr>,
    pub image: Option<ListRepr>,
    pub price_per_night: Option<Scalar>,
    pub price_weekday: Option<Scalar>,
    #[serde(rename = "priceWeekday")]
    pub price_weekday_camel: Option<Scalar>,
    pub price: Option<Scalar>,
    pub price_weekend: Option<Scalar>,
    #[serde(rename = "priceWeekend")]
    pub price_weekend_camel: Option<Scalar>,
    pub status: Option<Scalar>,
    pub availability: Option<Scalar>,
    pub updated_at: Option<TimeRepr>,
    #[serde(rename = "updatedAt")]
    pub updated_at_camel: Option<TimeRepr>,
}

impl RoomRecord {
    fn status(&self) -> RoomStatus {
        let explicit = scalar_text(&self.status).and_then(|s| s.parse::<RoomStatus>().ok());
        explicit
            .or_else(|| {
                self.availability
                    .as_ref()
                    .and_then(Scalar::flag)
                    .map(RoomStatus::from_availability)
            })
            .unwrap_or(RoomStatus::Maintenance)
    }

    fn room_type(&self) -> String {
        scalar_text(&self.kind)
            .or_else(|| {
                self.room_type
                    .as_ref()
                    .and_then(|t| t.labels().into_iter().next())
            })
            .unwrap_or_else(|| DEFAULT_ROOM_TYPE.to_string())
    }
}

fn first_decimal<'a>(candidates: impl IntoIterator<Item = &'a Option<Scalar>>) -> Option<Decimal> {
    candidates
        .into_iter()
        .flatten()
        .find_map(Scalar::decimal)
}

impl From<RoomRecord> for Room {
    fn from(r: RoomRecord) -> Self {
        let price_weekday = first_decimal([
            &r.price_per_night,
            &r.price_weekday,
            &r.price_weekday_camel,
            &r.price,
        ])
        .unwrap_or(Decimal::ZERO);
        let price_weekend =
            first_decimal([&r.price_weekend, &r.price_weekend_camel]).unwrap_or(price_weekday);

        let mut images = [&r.images, &r.image]
            .into_iter()
            .flatten()
            .map(ListRepr::labels)
            .find(|labels| !labels.is_empty())
            .unwrap_or_default();
        if images.is_empty() {
            images.push(PLACEHOLDER_IMAGE.to_string());
        }

        Room {
            id: RoomId(first_text([&r.id, &r.mongo_id, &r.upper_id]).unwrap_or_default()),
            name: first_scalar([&r.name, &r.upper_name]).unwrap_or_default(),
            room_type: r.room_type(),
            category: scalar_text(&r.category).unwrap_or_default(),
            room_number: first_scalar([&r.room_number, &r.room_number_camel]).unwrap_or_default(),
            description: scalar_text(&r.description).unwrap_or_default(),
            bed: first_scalar([&r.bed_type, &r.bed]).unwrap_or_else(|| DEFAULT_BED.to_string()),
            capacity: r
                .capacity
                .as_ref()
                .and_then(Scalar::positive_u32)
                .unwrap_or(DEFAULT_CAPACITY),
            facilities: r
                .facilities
                .as_ref()
                .map(ListRepr::labels)
                .unwrap_or_default()
                .into_iter()
                .collect::<BTreeSet<_>>(),
            images,
            price_weekday,
            price_weekend,
            status: r.status(),
            updated_at: first_time([&r.updated_at, &r.updated_at_camel]).map(|dt| dt.date_naive()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RoomList {
    Bare(Vec<Value>),
    Wrapped {
        #[serde(default)]
        rooms: Option<Vec<Value>>,
        #[serde(default)]
        data: Option<Vec<Value>>,
    },
}

/// Decode a room list body (`null`, a bare array or `{"rooms": [...]}`)
pub fn decode_rooms(body: &[u8]) -> Result<Vec<Room>, serde_json::Error> {
    let items = match serde_json::from_slice::<Option<RoomList>>(body)? {
        None => Vec::new(),
        Some(RoomList::Bare(items)) => items,
        Some(RoomList::Wrapped { rooms, data }) => rooms.or(data).unwrap_or_default(),
    };
    Ok(lenient::<RoomRecord>(items).into_iter().map(Room::from).collect())
}

// =============================================================================
// User
// =============================================================================

/// User as it arrives from the backend
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub id: Option<IdRepr>,
    #[serde(rename = "Id")]
    pub upper_id: Option<IdRepr>,
    #[serde(rename = "_id")]
    pub mongo_id: Option<IdRepr>,
    #[serde(rename = "Name")]
    pub upper_name: Option<Scalar>,
    pub name: Option<Scalar>,
    #[serde(rename = "Email")]
    pub upper_email: Option<Scalar>,
    pub email: Option<Scalar>,
    #[serde(rename = "NoTlp")]
    pub no_tlp: Option<Scalar>,
    #[serde(rename = "noTlp")]
    pub no_tlp_camel: Option<Scalar>,
    pub phone: Option<Scalar>,
    #[serde(rename = "Role")]
    pub upper_role: Option<Scalar>,
    pub role: Option<Scalar>,
    #[serde(rename = "CreatedAt")]
    pub upper_created_at: Option<TimeRepr>,
    #[serde(rename = "createdAt")]
    pub created_at_camel: Option<TimeRepr>,
    pub created_at: Option<TimeRepr>,
    /// Only present on login responses
    pub token: Option<Scalar>,
}

impl UserRecord {
    pub fn token(&self) -> Option<String> {
        scalar_text(&self.token)
    }
}

impl From<UserRecord> for User {
    fn from(u: UserRecord) -> Self {
        User {
            id: UserId(first_text([&u.id, &u.upper_id, &u.mongo_id]).unwrap_or_default()),
            name: first_scalar([&u.upper_name, &u.name])
                .unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
            email: first_scalar([&u.upper_email, &u.email])
                .unwrap_or_else(|| DEFAULT_USER_EMAIL.to_string()),
            phone: first_scalar([&u.no_tlp, &u.no_tlp_camel, &u.phone])
                .unwrap_or_else(|| DEFAULT_USER_PHONE.to_string()),
            role: first_scalar([&u.upper_role, &u.role])
                .map(|r| Role::parse(&r))
                .unwrap_or_default(),
            // Go zero time means "unset"
            created_at: first_time([&u.upper_created_at, &u.created_at_camel, &u.created_at])
                .filter(|dt| dt.timestamp() > 0),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UserList {
    Bare(Vec<Value>),
    Wrapped {
        #[serde(default)]
        users: Option<Vec<Value>>,
    },
}

/// Decode a user list body (`null`, a bare array or `{"users": [...]}`)
pub fn decode_users(body: &[u8]) -> Result<Vec<User>, serde_json::Error> {
    let items = match serde_json::from_slice::<Option<UserList>>(body)? {
        None => Vec::new(),
        Some(UserList::Bare(items)) => items,
        Some(UserList::Wrapped { users }) => users.unwrap_or_default(),
    };
    Ok(lenient::<UserRecord>(items).into_iter().map(User::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(json: &str) -> Room {
        serde_json::from_str::<RoomRecord>(json).unwrap().into()
    }

    fn user(json: &str) -> User {
        serde_json::from_str::<UserRecord>(json).unwrap().into()
    }

    #[test]
    fn test_empty_room_record_gets_defaults() {
        let r = room("{}");
        assert_eq!(r.id.as_str(), "");
        assert_eq!(r.name, "");
        assert_eq!(r.room_type, "Glamping");
        assert_eq!(r.capacity, 2);
        assert_eq!(r.bed, "Queen Bed");
        assert!(r.facilities.is_empty());
        assert_eq!(r.images, vec![PLACEHOLDER_IMAGE.to_string()]);
        assert_eq!(r.price_weekday, Decimal::ZERO);
        assert_eq!(r.status, RoomStatus::Maintenance);
        assert_eq!(r.updated_label(), "N/A");
    }

    #[test]
    fn test_backend_room_shape() {
        let r = room(
            r#"{
                "id": "6650f0c2a1b2c3d4e5f60718",
                "name": "Villa Pinus",
                "description": "Villa dua kamar",
                "room_number": "V-02",
                "price_per_night": 1500000,
                "images": ["/uploads/a.jpg", "/uploads/b.jpg"],
                "bed_type": "King Bed",
                "capacity": 4,
                "availability": true,
                "category": "Premium",
                "updated_at": "2025-11-02T08:30:00Z",
                "room_type": [{"id": "x", "name": "Villa", "description": ""}],
                "facilities": [{"id": "f1", "name": "WiFi"}, {"id": "f2", "name": "Kitchen"}],
                "Password": "ignored"
            }"#,
        );
        assert_eq!(r.id.as_str(), "6650f0c2a1b2c3d4e5f60718");
        assert_eq!(r.room_type, "Villa");
        assert_eq!(r.capacity, 4);
        assert_eq!(r.bed, "King Bed");
        assert_eq!(r.status, RoomStatus::Available);
        assert_eq!(r.price_weekday, Decimal::new(1_500_000, 0));
        assert_eq!(r.price_weekend, r.price_weekday);
        assert_eq!(r.cover_image(), "/uploads/a.jpg");
        assert!(r.has_facility("WiFi") && r.has_facility("Kitchen"));
        assert_eq!(r.updated_at, NaiveDate::from_ymd_opt(2025, 11, 2));
    }

    #[test]
    fn test_room_aliases_and_loose_types() {
        let r = room(
            r#"{
                "_id": {"$oid": "abc123"},
                "type": "Cabin",
                "bed": "Twin Bed",
                "capacity": "0",
                "price": "750000",
                "priceWeekend": 900000.0,
                "status": "Occupied",
                "availability": true,
                "facilities": "AC, WiFi, , AC",
                "updatedAt": 1730505600000
            }"#,
        );
        assert_eq!(r.id.as_str(), "abc123");
        assert_eq!(r.room_type, "Cabin");
        assert_eq!(r.bed, "Twin Bed");
        // zero capacity falls back like a missing one
        assert_eq!(r.capacity, 2);
        assert_eq!(r.price_weekday, Decimal::new(750_000, 0));
        assert_eq!(r.price_weekend, Decimal::new(900_000, 0));
        // explicit status wins over the availability flag
        assert_eq!(r.status, RoomStatus::Occupied);
        assert_eq!(r.facilities.len(), 2);
        assert_eq!(r.updated_at, NaiveDate::from_ymd_opt(2024, 11, 2));
    }

    #[test]
    fn test_room_wrong_types_do_not_fail() {
        let r = room(r#"{"id": 42, "name": null, "capacity": {"n": 3}, "images": [], "updated_at": "kemarin"}"#);
        assert_eq!(r.id.as_str(), "42");
        assert_eq!(r.capacity, 2);
        assert_eq!(r.images, vec![PLACEHOLDER_IMAGE.to_string()]);
        assert_eq!(r.updated_at, None);
    }

    #[test]
    fn test_decode_rooms_shapes() {
        assert!(decode_rooms(b"null").unwrap().is_empty());
        assert!(decode_rooms(b"[]").unwrap().is_empty());
        let rooms = decode_rooms(br#"[{"name": "A"}, null, {"name": "B"}]"#).unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[1].name, "B");
        let rooms = decode_rooms(br#"{"rooms": [{"name": "C"}]}"#).unwrap();
        assert_eq!(rooms[0].name, "C");
        assert!(decode_rooms(b"<html>").is_err());
    }

    #[test]
    fn test_empty_user_record_gets_defaults() {
        let u = user("{}");
        assert_eq!(u.name, "Tanpa Nama");
        assert_eq!(u.email, "-");
        assert_eq!(u.phone, "-");
        assert_eq!(u.role, Role::Resepsionis);
        assert!(u.created_at.is_none());
    }

    #[test]
    fn test_user_aliases() {
        let u = user(
            r#"{"Id": "u-7", "name": "Rina", "email": "rina@astro.id", "noTlp": "0813",
                "role": "Diblokir", "createdAt": "2025-10-01T00:00:00Z"}"#,
        );
        assert_eq!(u.id.as_str(), "u-7");
        assert_eq!(u.name, "Rina");
        assert_eq!(u.phone, "0813");
        assert!(u.role.is_blocked());
        assert!(u.created_at.is_some());
    }

    #[test]
    fn test_go_zero_time_is_unset() {
        let u = user(r#"{"id": "1", "CreatedAt": "0001-01-01T00:00:00Z"}"#);
        assert!(u.created_at.is_none());
    }

    #[test]
    fn test_decode_users_shapes() {
        let bare = decode_users(br#"[{"Name": "A"}]"#).unwrap();
        assert_eq!(bare.len(), 1);
        let wrapped = decode_users(br#"{"users": [{"Name": "A"}, {"Name": "B"}]}"#).unwrap();
        assert_eq!(wrapped.len(), 2);
        assert!(decode_users(br#"{"message": "ok"}"#).unwrap().is_empty());
        assert!(decode_users(b"null").unwrap().is_empty());
    }

    #[test]
    fn test_both_spellings_on_one_record() {
        let users = decode_users(
            br#"[{"id": "1", "Name": "Sari", "name": "sari"}, {"id": "2", "Name": "Budi"}]"#,
        )
        .unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Sari");
        assert_eq!(users[1].name, "Budi");

        let rooms = decode_rooms(
            br#"[{"name": "Kabin", "price_per_night": 500000, "price_weekday": 450000,
                  "priceWeekend": 700000, "price_weekend": 650000,
                  "updated_at": "2025-11-02", "updatedAt": "2025-01-01"}]"#,
        )
        .unwrap();
        assert_eq!(rooms[0].price_weekday, Decimal::new(500_000, 0));
        assert_eq!(rooms[0].price_weekend, Decimal::new(650_000, 0));
        assert_eq!(rooms[0].updated_at, NaiveDate::from_ymd_opt(2025, 11, 2));
    }

    #[test]
    fn test_blank_primary_falls_through() {
        let users = decode_users(br#"[{"Name": "", "name": "Rina", "NoTlp": " ", "phone": "0812"}]"#)
            .unwrap();
        assert_eq!(users[0].name, "Rina");
        assert_eq!(users[0].phone, "0812");

        let r = room(r#"{"name": "  ", "Name": "Villa Atas", "bed_type": "", "bed": "Twin Bed"}"#);
        assert_eq!(r.name, "Villa Atas");
        assert_eq!(r.bed, "Twin Bed");
    }

    #[test]
    fn test_bad_element_does_not_sink_list() {
        let rooms = decode_rooms(br#"[{"name": "A"}, "garbage", 7, {"name": "B"}]"#).unwrap();
        let names: Vec<_> = rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);

        let users = decode_users(br#"{"users": [true, {"Name": "C"}]}"#).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "C");

        let wrapped = decode_rooms(br#"{"data": [{"name": "D"}]}"#).unwrap();
        assert_eq!(wrapped[0].name, "D");
    }

    #[test]
    fn test_login_token() {
        let record: UserRecord =
            serde_json::from_str(r#"{"Name": "Admin", "token": "abc"}"#).unwrap();
        assert_eq!(record.token().as_deref(), Some("abc"));
    }
}

//! In-memory backend state
//!
//! Rooms and users are stored in the shape the real backend returns them
//! (Go field names, joined room-type and facility documents) so the
//! front-end decoding layer is exercised end to end.

use axum::http::{Method, StatusCode};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

/// Mongo-style identifier (24 hex chars)
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()[..24].to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct NamedRef {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl NamedRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            description: String::new(),
        }
    }
}

/// Room document as served by `GET /admin/room`
#[derive(Debug, Clone, Serialize)]
pub struct StoredRoom {
    pub id: String,
    pub name: String,
    pub description: String,
    pub room_number: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_night: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_weekend: Decimal,
    pub images: Vec<String>,
    pub bed_type: String,
    pub capacity: u32,
    pub availability: bool,
    pub status: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub room_type: Vec<NamedRef>,
    pub facilities: Vec<NamedRef>,
}

/// User document as served by `GET /admin/user`
#[derive(Debug, Clone, Serialize)]
pub struct StoredUser {
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "NoTlp")]
    pub phone: String,
    #[serde(skip)]
    pub password: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// An uploaded image kept in memory
#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// One request seen by the server, for assertions in tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
}

/// A canned failure returned instead of the next request's real response
#[derive(Debug, Clone)]
pub struct Fault {
    pub status: StatusCode,
    pub body: FaultBody,
}

#[derive(Debug, Clone)]
pub enum FaultBody {
    /// `{"error": ...}`, the backend's usual error shape
    Error(String),
    /// Raw bytes sent as is (malformed JSON, HTML error pages)
    Raw(String),
}

#[derive(Debug, Default)]
pub struct MockState {
    pub rooms: RwLock<Vec<StoredRoom>>,
    pub users: RwLock<Vec<StoredUser>>,
    pub uploads: RwLock<HashMap<String, StoredUpload>>,
    faults: Mutex<Vec<Fault>>,
    requests: Mutex<Vec<RequestRecord>>,
    /// When set, list endpoints answer `null` like a Go nil slice
    nil_lists: AtomicBool,
}

pub type SharedState = Arc<MockState>;

impl MockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the demo rooms and accounts
    pub fn seeded() -> Self {
        let now = Utc::now();
        let room = |name: &str,
                    kind: &str,
                    number: &str,
                    weekday: i64,
                    weekend: i64,
                    capacity: u32,
                    bed: &str,
                    status: &str,
                    facilities: &[&str]| StoredRoom {
            id: new_id(),
            name: name.to_string(),
            description: format!("{name} di kawasan Astro Ciater"),
            room_number: number.to_string(),
            price_per_night: Decimal::from(weekday),
            price_weekend: Decimal::from(weekend),
            images: vec![format!("/uploads/rooms/{}.jpg", number.to_lowercase())],
            bed_type: bed.to_string(),
            capacity,
            availability: status == "available",
            status: status.to_string(),
            category: "Standard".to_string(),
            created_at: now,
            updated_at: now,
            room_type: vec![NamedRef::new(kind)],
            facilities: facilities.iter().map(|f| NamedRef::new(*f)).collect(),
        };

        let user = |name: &str, email: &str, phone: &str, password: &str, role: &str| StoredUser {
            id: new_id(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            password: password.to_string(),
            role: role.to_string(),
            created_at: now,
            updated_at: now,
        };

        let mut state = Self::new();
        *state.rooms.get_mut() = vec![
            room(
                "Glamping Dome Sunrise",
                "Glamping",
                "G-01",
                850_000,
                1_100_000,
                2,
                "Queen Bed",
                "available",
                &["AC", "WiFi", "Private Bathroom"],
            ),
            room(
                "Pine Forest Cabin",
                "Cabin",
                "C-03",
                1_200_000,
                1_500_000,
                4,
                "Twin Bed",
                "maintenance",
                &["WiFi", "Fireplace", "Kitchen"],
            ),
            room(
                "Executive Suite Villa",
                "Villa",
                "V-01",
                3_200_000,
                4_000_000,
                6,
                "King Bed",
                "occupied",
                &["AC", "WiFi", "Hot Tub", "Kitchen", "Balcony"],
            ),
        ];
        *state.users.get_mut() = vec![
            user("Admin Astro", "admin@astro.id", "081200000001", "admin123", "Admin"),
            user(
                "Sari Resepsionis",
                "sari@astro.id",
                "081200000002",
                "sari123",
                "Resepsionis",
            ),
            user("Budi Tamu", "budi@astro.id", "081200000003", "budi123", "Diblokir"),
        ];
        state
    }

    pub fn into_shared(self) -> SharedState {
        Arc::new(self)
    }

    // ========== Fault injection ==========

    /// Fail the next request with `{"error": message}`
    pub async fn fail_next(&self, status: StatusCode, message: impl Into<String>) {
        self.faults.lock().await.push(Fault {
            status,
            body: FaultBody::Error(message.into()),
        });
    }

    /// Answer the next request with a raw body
    pub async fn fail_next_raw(&self, status: StatusCode, body: impl Into<String>) {
        self.faults.lock().await.push(Fault {
            status,
            body: FaultBody::Raw(body.into()),
        });
    }

    pub(crate) async fn take_fault(&self) -> Option<Fault> {
        let mut faults = self.faults.lock().await;
        (!faults.is_empty()).then(|| faults.remove(0))
    }

    pub fn set_nil_lists(&self, nil: bool) {
        self.nil_lists.store(nil, Ordering::Relaxed);
    }

    pub fn nil_lists(&self) -> bool {
        self.nil_lists.load(Ordering::Relaxed)
    }

    // ========== Request log ==========

    pub(crate) async fn record(&self, record: RequestRecord) {
        self.requests.lock().await.push(record);
    }

    pub async fn requests(&self) -> Vec<RequestRecord> {
        self.requests.lock().await.clone()
    }

    pub async fn last_request(&self) -> Option<RequestRecord> {
        self.requests.lock().await.last().cloned()
    }

    // ========== Snapshots ==========

    pub async fn room_count(&self) -> usize {
        self.rooms.read().await.len()
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn find_room(&self, id: &str) -> Option<StoredRoom> {
        self.rooms.read().await.iter().find(|r| r.id == id).cloned()
    }

    pub async fn find_user(&self, id: &str) -> Option<StoredUser> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    pub async fn find_user_by_email(&self, email: &str) -> Option<StoredUser> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }
}

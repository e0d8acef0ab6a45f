//! In-memory repositories for screen unit tests

use astro_client::{ClientError, ClientResult, RoomRepository, UserRepository};
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::http::StatusCode;
use shared::models::{
    ImageSource, Room, RoomDraft, RoomId, RoomStatus, User, UserDraft, UserId,
};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn sample_room(id: &str, name: &str) -> Room {
    Room {
        id: RoomId::new(id),
        name: name.to_string(),
        room_type: "Villa".to_string(),
        category: "Standard".to_string(),
        room_number: format!("V-{id}"),
        description: "Kamar contoh".to_string(),
        bed: "Queen Bed".to_string(),
        capacity: 2,
        facilities: BTreeSet::new(),
        images: vec!["https://img.astro.id/sample.jpg".to_string()],
        price_weekday: Decimal::new(1_000_000, 0),
        price_weekend: Decimal::new(1_200_000, 0),
        status: RoomStatus::Available,
        updated_at: None,
    }
}

pub fn sample_user(id: &str, name: &str, role: &str) -> User {
    User {
        id: UserId::new(id),
        name: name.to_string(),
        email: format!("{}@astro.id", name.to_lowercase().replace(' ', ".")),
        phone: "0812".to_string(),
        role: role.parse().unwrap_or_default(),
        created_at: None,
    }
}

fn injected() -> ClientError {
    ClientError::Rejected {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: "injected failure".to_string(),
    }
}

#[derive(Default)]
struct Counters {
    fail_next: AtomicBool,
    list_calls: AtomicUsize,
    mutations: AtomicUsize,
}

impl Counters {
    fn check(&self) -> ClientResult<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(injected());
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeRooms {
    rooms: Arc<Mutex<Vec<Room>>>,
    counters: Arc<Counters>,
}

impl FakeRooms {
    pub fn with(rooms: Vec<Room>) -> Self {
        Self {
            rooms: Arc::new(Mutex::new(rooms)),
            counters: Arc::default(),
        }
    }

    pub fn fail_next(&self) {
        self.counters.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.counters.list_calls.load(Ordering::SeqCst)
    }

    pub fn mutations(&self) -> usize {
        self.counters.mutations.load(Ordering::SeqCst)
    }

    fn room_from(id: RoomId, draft: &RoomDraft) -> Room {
        let images = draft
            .images
            .iter()
            .map(|i| match i {
                ImageSource::Url(url) => url.clone(),
                ImageSource::Upload(u) => format!("/uploads/rooms/{}", u.file_name),
            })
            .collect();
        Room {
            id,
            name: draft.name.clone(),
            room_type: draft.room_type.clone(),
            category: draft.category.clone(),
            room_number: draft.room_number.clone(),
            description: draft.description.clone(),
            bed: draft.bed.clone(),
            capacity: draft.capacity,
            facilities: draft.facilities.clone(),
            images,
            price_weekday: draft.price_weekday,
            price_weekend: draft.price_weekend,
            status: draft.status,
            updated_at: None,
        }
    }
}

#[async_trait]
impl RoomRepository for FakeRooms {
    async fn list(&self) -> ClientResult<Vec<Room>> {
        self.counters.list_calls.fetch_add(1, Ordering::SeqCst);
        self.counters.check()?;
        Ok(self.rooms.lock().unwrap().clone())
    }

    async fn create(&self, draft: &RoomDraft) -> ClientResult<()> {
        self.counters.mutations.fetch_add(1, Ordering::SeqCst);
        self.counters.check()?;
        let mut rooms = self.rooms.lock().unwrap();
        let id = RoomId::new(format!("new-{}", rooms.len() + 1));
        rooms.push(Self::room_from(id, draft));
        Ok(())
    }

    async fn update(&self, id: &RoomId, draft: &RoomDraft) -> ClientResult<()> {
        self.counters.mutations.fetch_add(1, Ordering::SeqCst);
        self.counters.check()?;
        let mut rooms = self.rooms.lock().unwrap();
        if let Some(room) = rooms.iter_mut().find(|r| &r.id == id) {
            let images = room.images.clone();
            *room = Self::room_from(id.clone(), draft);
            if room.images.is_empty() {
                room.images = images;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: &RoomId) -> ClientResult<()> {
        self.counters.mutations.fetch_add(1, Ordering::SeqCst);
        self.counters.check()?;
        self.rooms.lock().unwrap().retain(|r| &r.id != id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeUsers {
    users: Arc<Mutex<Vec<User>>>,
    counters: Arc<Counters>,
}

impl FakeUsers {
    pub fn with(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            counters: Arc::default(),
        }
    }

    pub fn fail_next(&self) {
        self.counters.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn mutations(&self) -> usize {
        self.counters.mutations.load(Ordering::SeqCst)
    }

    fn user_from(id: UserId, draft: &UserDraft) -> User {
        User {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            role: draft.role.clone(),
            created_at: None,
        }
    }
}

#[async_trait]
impl UserRepository for FakeUsers {
    async fn list(&self) -> ClientResult<Vec<User>> {
        self.counters.list_calls.fetch_add(1, Ordering::SeqCst);
        self.counters.check()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create(&self, draft: &UserDraft) -> ClientResult<()> {
        self.counters.mutations.fetch_add(1, Ordering::SeqCst);
        self.counters.check()?;
        let mut users = self.users.lock().unwrap();
        let id = UserId::new(format!("new-{}", users.len() + 1));
        users.push(Self::user_from(id, draft));
        Ok(())
    }

    async fn update(&self, id: &UserId, draft: &UserDraft) -> ClientResult<()> {
        self.counters.mutations.fetch_add(1, Ordering::SeqCst);
        self.counters.check()?;
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| &u.id == id) {
            *user = Self::user_from(id.clone(), draft);
        }
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> ClientResult<()> {
        self.counters.mutations.fetch_add(1, Ordering::SeqCst);
        self.counters.check()?;
        self.users.lock().unwrap().retain(|u| &u.id != id);
        Ok(())
    }
}

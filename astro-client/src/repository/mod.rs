//! Repository traits over the remote collections
//!
//! Screens only talk to these traits, so a caching or optimistic layer can be
//! slotted in without touching them.

mod rooms;
mod users;

use async_trait::async_trait;
use shared::models::{Room, RoomDraft, RoomId, User, UserDraft, UserId};

use crate::ClientResult;

pub use rooms::RemoteRooms;
pub use users::RemoteUsers;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<Room>>;
    async fn create(&self, draft: &RoomDraft) -> ClientResult<()>;
    async fn update(&self, id: &RoomId, draft: &RoomDraft) -> ClientResult<()>;
    async fn delete(&self, id: &RoomId) -> ClientResult<()>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<User>>;
    async fn create(&self, draft: &UserDraft) -> ClientResult<()>;
    async fn update(&self, id: &UserId, draft: &UserDraft) -> ClientResult<()>;
    async fn delete(&self, id: &UserId) -> ClientResult<()>;
}

/// Path segment with the id percent-encoded
fn with_id(prefix: &str, id: &str) -> String {
    format!("{}/{}", prefix, urlencoding::encode(id))
}

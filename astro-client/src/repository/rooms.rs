use async_trait::async_trait;
use shared::models::{Room, RoomDraft, RoomId};
use shared::records::decode_rooms;

use super::{RoomRepository, with_id};
use crate::multipart::room_form;
use crate::{ClientResult, HttpClient};

/// Rooms backed by the `/admin/*-room` endpoints
#[derive(Debug, Clone)]
pub struct RemoteRooms {
    http: HttpClient,
}

impl RemoteRooms {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl RoomRepository for RemoteRooms {
    async fn list(&self) -> ClientResult<Vec<Room>> {
        let body = self.http.get("admin/room").await?;
        let rooms = decode_rooms(&body)?;
        tracing::debug!(count = rooms.len(), "Rooms fetched");
        Ok(rooms)
    }

    async fn create(&self, draft: &RoomDraft) -> ClientResult<()> {
        self.http
            .post_multipart("admin/create-room", room_form(draft)?)
            .await?;
        tracing::info!(name = %draft.name, "Room created");
        Ok(())
    }

    async fn update(&self, id: &RoomId, draft: &RoomDraft) -> ClientResult<()> {
        self.http
            .post_multipart(&with_id("admin/edit-room", id.as_str()), room_form(draft)?)
            .await?;
        tracing::info!(%id, "Room updated");
        Ok(())
    }

    async fn delete(&self, id: &RoomId) -> ClientResult<()> {
        self.http
            .delete(&with_id("admin/delete-room", id.as_str()))
            .await?;
        tracing::info!(%id, "Room deleted");
        Ok(())
    }
}

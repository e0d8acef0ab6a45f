use async_trait::async_trait;
use shared::models::{User, UserDraft, UserId};
use shared::records::decode_users;

use super::{UserRepository, with_id};
use crate::{ClientResult, HttpClient};

/// Users backed by the `/admin/*-user` endpoints
#[derive(Debug, Clone)]
pub struct RemoteUsers {
    http: HttpClient,
}

impl RemoteUsers {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl UserRepository for RemoteUsers {
    async fn list(&self) -> ClientResult<Vec<User>> {
        let body = self.http.get("admin/user").await?;
        let users = decode_users(&body)?;
        tracing::debug!(count = users.len(), "Users fetched");
        Ok(users)
    }

    async fn create(&self, draft: &UserDraft) -> ClientResult<()> {
        self.http.post_json("admin/create-user", draft).await?;
        tracing::info!(email = %draft.email, "User created");
        Ok(())
    }

    async fn update(&self, id: &UserId, draft: &UserDraft) -> ClientResult<()> {
        self.http
            .post_json(&with_id("admin/edit-user", id.as_str()), draft)
            .await?;
        tracing::info!(%id, "User updated");
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> ClientResult<()> {
        self.http
            .delete(&with_id("admin/delete-user", id.as_str()))
            .await?;
        tracing::info!(%id, "User deleted");
        Ok(())
    }
}

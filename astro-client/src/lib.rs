//! Astro Client - HTTP client for the booking backend
//!
//! Typed calls to the backend API, multipart encoding of room drafts, and
//! the repository traits the front-end screens are written against.

pub mod config;
pub mod error;
pub mod http;
pub mod multipart;
pub mod repository;
pub mod session;
pub mod upload;

pub use config::{ClientConfig, DeleteMethod};
pub use error::{ClientError, ClientResult, FailureKind};
pub use http::HttpClient;
pub use repository::{RemoteRooms, RemoteUsers, RoomRepository, UserRepository};
pub use session::Session;
pub use upload::load_image;

/// Entry point bundling the HTTP client and its repositories
#[derive(Debug, Clone)]
pub struct AstroClient {
    http: HttpClient,
}

impl AstroClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: config.build_http_client()?,
        })
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn rooms(&self) -> RemoteRooms {
        RemoteRooms::new(self.http.clone())
    }

    pub fn users(&self) -> RemoteUsers {
        RemoteUsers::new(self.http.clone())
    }

    /// Log in and use the session token for later calls
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<Session> {
        let session = self.http.login(email, password).await?;
        self.http.set_token(Some(session.token.clone()));
        tracing::info!(user = %session.user.name, "Logged in");
        Ok(session)
    }
}

//! In-memory stand-in for the Astro backend API
//!
//! Serves the same routes, field names and error replies as the real
//! backend so the client and front-end can be exercised without it.
//! Integration tests start it on an ephemeral port with [`MockServer::spawn`].

pub mod api;
pub mod state;

use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub use api::router;
pub use state::{MockState, RequestRecord, SharedState, StoredRoom, StoredUser};

/// A running mock server, aborted on drop
pub struct MockServer {
    pub addr: SocketAddr,
    pub state: SharedState,
    handle: JoinHandle<()>,
}

impl MockServer {
    /// Bind `127.0.0.1:0` and serve `state` in a background task
    pub async fn spawn(state: MockState) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        Self::serve(listener, state.into_shared()).await
    }

    pub async fn serve(listener: TcpListener, state: SharedState) -> std::io::Result<Self> {
        let addr = listener.local_addr()?;
        let app = router(state.clone());
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(error = %e, "Mock server stopped");
            }
        });
        tracing::debug!(%addr, "Mock server listening");
        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

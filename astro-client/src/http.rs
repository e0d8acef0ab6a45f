//! HTTP client for the backend API

use reqwest::{Client, RequestBuilder, StatusCode, multipart::Form};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::client::{LoginRequest, LoginResponse, MessageBody};
use std::time::Duration;

use crate::config::DeleteMethod;
use crate::session::Session;
use crate::{ClientConfig, ClientError, ClientResult};

/// Raw response body of a successful call
pub type Body = bytes::Bytes;

/// HTTP client for making requests to the backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    delete_method: DeleteMethod,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            delete_method: config.delete_method,
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn delete_method(&self) -> DeleteMethod {
        self.delete_method
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> ClientResult<Body> {
        tracing::debug!(path, "GET");
        self.execute(self.client.get(self.url(path))).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Body> {
        tracing::debug!(path, "POST json");
        self.execute(self.client.post(self.url(path)).json(body)).await
    }

    /// Make a POST request with a multipart form
    pub async fn post_multipart(&self, path: &str, form: Form) -> ClientResult<Body> {
        tracing::debug!(path, "POST multipart");
        self.execute(self.client.post(self.url(path)).multipart(form))
            .await
    }

    /// Delete with the configured method
    pub async fn delete(&self, path: &str) -> ClientResult<Body> {
        tracing::debug!(path, method = %self.delete_method, "delete");
        let request = match self.delete_method {
            DeleteMethod::Delete => self.client.delete(self.url(path)),
            DeleteMethod::Post => self.client.post(self.url(path)),
        };
        self.execute(request).await
    }

    async fn execute(&self, request: RequestBuilder) -> ClientResult<Body> {
        let response = self.authorize(request).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response(response: reqwest::Response) -> ClientResult<Body> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = rejection_message(status, &body);
            tracing::warn!(%status, %message, "Request rejected");
            return Err(ClientError::Rejected { status, message });
        }

        Ok(body)
    }

    // ========== Auth API ==========

    /// Login with email and password
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Session> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let body = self.post_json("login/do-login", &request).await?;
        let response: LoginResponse = decode(&body)?;
        Ok(Session::from(response))
    }
}

/// Decode a JSON body
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> ClientResult<T> {
    serde_json::from_slice(body).map_err(Into::into)
}

/// Best-effort server message: JSON `error`/`message`, else the raw text,
/// else the status reason phrase
pub fn rejection_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<MessageBody>(body)
        && let Some(text) = parsed.text()
    {
        return text.to_string();
    }

    let raw = String::from_utf8_lossy(body);
    let raw = raw.trim();
    if !raw.is_empty() {
        return raw.to_string();
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

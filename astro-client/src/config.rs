//! Client configuration

use std::fmt;
use std::str::FromStr;

/// HTTP method used for delete calls
///
/// The backend routes deletes with `DELETE`; some deployments only accept
/// `POST` on the same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteMethod {
    #[default]
    Delete,
    Post,
}

impl fmt::Display for DeleteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delete => f.write_str("DELETE"),
            Self::Post => f.write_str("POST"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported delete method: {0} (expected DELETE or POST)")]
pub struct UnknownDeleteMethod(pub String);

impl FromStr for DeleteMethod {
    type Err = UnknownDeleteMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DELETE" => Ok(Self::Delete),
            "POST" => Ok(Self::Post),
            _ => Err(UnknownDeleteMethod(s.to_string())),
        }
    }
}

/// Client configuration for connecting to the backend API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Session token sent as a bearer header
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Method used for delete calls
    pub delete_method: DeleteMethod,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            delete_method: DeleteMethod::Delete,
        }
    }

    /// Set the session token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn with_delete_method(mut self, method: DeleteMethod) -> Self {
        self.delete_method = method;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

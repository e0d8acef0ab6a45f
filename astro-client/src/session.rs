//! Logged-in session

use shared::client::LoginResponse;
use shared::models::User;

/// Result of a successful login, kept in memory only
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
    pub message: String,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        let token = response.token();
        Self {
            token,
            message: response.message,
            user: response.user.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::client::FALLBACK_TOKEN;
    use shared::models::Role;

    #[test]
    fn test_session_from_login_response() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"message": "Login berhasil", "user": {"id": "u1", "Name": "Admin Astro", "Role": "Admin"}}"#,
        )
        .unwrap();
        let session = Session::from(response);
        assert_eq!(session.token, FALLBACK_TOKEN);
        assert_eq!(session.user.role, Role::Admin);
        assert_eq!(session.message, "Login berhasil");
    }
}

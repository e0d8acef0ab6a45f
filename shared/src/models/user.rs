//! User Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use validator::Validate;

/// Role string marking a blocked account
pub const BLOCKED_ROLE: &str = "Diblokir";

/// Opaque user identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Staff/customer role
///
/// The three canonical roles are matched case-insensitively; anything else
/// the backend sends is kept verbatim in [`Role::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Admin,
    #[default]
    Resepsionis,
    Pelanggan,
    Other(String),
}

impl Role {
    /// Roles offered by the user form
    pub const CANONICAL: [Role; 3] = [Role::Admin, Role::Resepsionis, Role::Pelanggan];

    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" => Self::default(),
            "admin" => Self::Admin,
            "resepsionis" | "receptionist" => Self::Resepsionis,
            "pelanggan" | "customer" => Self::Pelanggan,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "Admin",
            Self::Resepsionis => "Resepsionis",
            Self::Pelanggan => "Pelanggan",
            Self::Other(s) => s,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Other(s) if s.eq_ignore_ascii_case(BLOCKED_ROLE))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// Canonical user account (password never held)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Initials shown in the avatar bubble
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn joined_label(&self) -> String {
        self.created_at
            .map(|d| d.format("%d %b %Y").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Create/update user payload, serialized with the backend's field names
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct UserDraft {
    #[serde(rename = "Name")]
    #[validate(length(min = 1, message = "Nama wajib diisi"))]
    pub name: String,
    #[serde(rename = "Email")]
    #[validate(email(message = "Format email tidak valid"))]
    pub email: String,
    #[serde(rename = "NoTlp")]
    #[validate(length(min = 1, message = "Nomor telepon wajib diisi"))]
    pub phone: String,
    /// Omitted on update when left blank
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "Role")]
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("RESEPSIONIS"), Role::Resepsionis);
        assert_eq!(Role::parse(""), Role::Resepsionis);
        assert_eq!(Role::parse("Diblokir"), Role::Other("Diblokir".to_string()));
        assert!(Role::parse("diblokir").is_blocked());
        assert!(!Role::Admin.is_blocked());
    }

    #[test]
    fn test_role_serde_roundtrip_keeps_unknown() {
        let role: Role = serde_json::from_str("\"Manager\"").unwrap();
        assert_eq!(role, Role::Other("Manager".to_string()));
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"Manager\"");
        assert_eq!(serde_json::to_string(&Role::Pelanggan).unwrap(), "\"Pelanggan\"");
    }

    #[test]
    fn test_user_draft_wire_names() {
        let draft = UserDraft {
            name: "Sari".to_string(),
            email: "sari@astro.id".to_string(),
            phone: "0812".to_string(),
            password: None,
            role: Role::Admin,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["Name"], "Sari");
        assert_eq!(json["NoTlp"], "0812");
        assert_eq!(json["Role"], "Admin");
        assert!(json.get("Password").is_none());
    }

    #[test]
    fn test_user_draft_validation() {
        let draft = UserDraft {
            name: "Sari".to_string(),
            email: "not-an-email".to_string(),
            phone: String::new(),
            password: Some("secret".to_string()),
            role: Role::Resepsionis,
        };
        let errors = draft.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("phone"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn test_initials() {
        let user = User {
            id: UserId::new("u1"),
            name: "budi santoso wijaya".to_string(),
            email: "-".to_string(),
            phone: "-".to_string(),
            role: Role::Admin,
            created_at: None,
        };
        assert_eq!(user.initials(), "BS");
        assert_eq!(user.joined_label(), "-");
    }
}

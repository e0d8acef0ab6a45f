//! User create/edit form

use shared::error::{AppError, ErrorCode};
use shared::models::{Role, User, UserDraft, UserId};
use shared::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, from_validation_errors,
    validate_optional_text, validate_required_text,
};
use validator::Validate;

use super::FormMode;

#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub mode: FormMode<UserId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Write-only; never prefilled
    pub password: String,
    pub role: Role,
}

impl UserForm {
    pub fn new(initial: Option<&User>) -> Self {
        match initial {
            Some(user) => Self {
                mode: FormMode::Edit(user.id.clone()),
                name: user.name.clone(),
                email: user.email.clone(),
                phone: user.phone.clone(),
                password: String::new(),
                role: user.role.clone(),
            },
            None => Self {
                mode: FormMode::Create,
                name: String::new(),
                email: String::new(),
                phone: String::new(),
                password: String::new(),
                role: Role::default(),
            },
        }
    }

    /// Validate and build the JSON payload. A blank password is required on
    /// create and means "keep the current one" on edit.
    pub fn submit(&self) -> Result<UserDraft, AppError> {
        let password = Some(self.password.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        let draft = UserDraft {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password,
            role: self.role.clone(),
        };

        draft.validate().map_err(|e| from_validation_errors(&e))?;
        validate_required_text(&draft.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&draft.email, "email", MAX_EMAIL_LEN)?;
        validate_required_text(&draft.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&draft.password, "password", MAX_PASSWORD_LEN)?;

        if self.mode.is_create() && draft.password.is_none() {
            return Err(AppError::with_message(
                ErrorCode::UserPasswordRequired,
                "Password wajib diisi",
            ));
        }
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> User {
        User {
            id: UserId::new("u7"),
            name: "Sari Resepsionis".into(),
            email: "sari@astro.id".into(),
            phone: "0812000111".into(),
            role: Role::Resepsionis,
            created_at: None,
        }
    }

    #[test]
    fn test_create_requires_password() {
        let mut form = UserForm::new(None);
        form.name = "Dewi".into();
        form.email = "dewi@astro.id".into();
        form.phone = "0813".into();
        let err = form.submit().unwrap_err();
        assert_eq!(err.code, ErrorCode::UserPasswordRequired);

        form.password = "rahasia".into();
        let draft = form.submit().unwrap();
        assert_eq!(draft.password.as_deref(), Some("rahasia"));
        assert_eq!(draft.role, Role::Resepsionis);
    }

    #[test]
    fn test_edit_blank_password_is_omitted() {
        let mut form = UserForm::new(Some(&existing()));
        assert_eq!(form.mode, FormMode::Edit(UserId::new("u7")));
        assert!(form.password.is_empty());

        form.password = "   ".into();
        form.role = Role::Admin;
        let draft = form.submit().unwrap();
        assert!(draft.password.is_none());
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("Password").is_none());
        assert_eq!(json["Role"], "Admin");
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut form = UserForm::new(Some(&existing()));
        form.email = "sari-at-astro".into();
        assert_eq!(form.submit().unwrap_err().message, "Format email tidak valid");
    }

    #[test]
    fn test_blocked_role_kept_on_edit() {
        let mut user = existing();
        user.role = Role::parse("Diblokir");
        let draft = UserForm::new(Some(&user)).submit().unwrap();
        assert!(draft.role.is_blocked());
    }
}

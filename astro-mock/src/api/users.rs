//! User API Handlers

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::ApiResponse;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Role;
use shared::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};

use crate::state::{SharedState, StoredUser, new_id};

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/admin/user", get(list))
        .route("/admin/create-user", post(create))
        .route("/admin/edit-user/{id}", post(update))
        .route("/admin/delete-user/{id}", post(delete).delete(delete))
}

/// Create/update body (Go field names, lower-case variants accepted)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UserPayload {
    #[serde(rename = "Name", alias = "name")]
    name: Option<String>,
    #[serde(rename = "Email", alias = "email")]
    email: Option<String>,
    #[serde(rename = "NoTlp", alias = "noTlp", alias = "phone")]
    phone: Option<String>,
    #[serde(rename = "Password", alias = "password")]
    password: Option<String>,
    #[serde(rename = "Role", alias = "role")]
    role: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl UserPayload {
    fn validate(&self) -> AppResult<()> {
        validate_required_text(non_blank(&self.name).unwrap_or(""), "Name", MAX_NAME_LEN)?;
        validate_required_text(non_blank(&self.email).unwrap_or(""), "Email", MAX_EMAIL_LEN)?;
        validate_optional_text(&self.phone, "NoTlp", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.password, "Password", MAX_PASSWORD_LEN)?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct UserReply {
    message: String,
    user: StoredUser,
}

fn bad_payload(_: JsonRejection) -> AppError {
    AppError::invalid_request("Invalid request payload")
}

async fn ensure_email_free(state: &SharedState, email: &str, except: Option<&str>) -> AppResult<()> {
    match state.find_user_by_email(email).await {
        Some(existing) if Some(existing.id.as_str()) != except => Err(AppError::with_message(
            ErrorCode::UserEmailExists,
            "Email sudah terdaftar",
        )
        .with_detail("email", email)),
        _ => Ok(()),
    }
}

/// List all users
async fn list(State(state): State<SharedState>) -> Response {
    if state.nil_lists() {
        return Json(serde_json::Value::Null).into_response();
    }
    Json(state.users.read().await.clone()).into_response()
}

/// Create a user; the password is required here
async fn create(
    State(state): State<SharedState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<UserReply>)> {
    let Json(payload) = payload.map_err(bad_payload)?;
    payload.validate()?;
    let password = non_blank(&payload.password).ok_or_else(|| {
        AppError::with_message(ErrorCode::UserPasswordRequired, "Password wajib diisi")
    })?;
    let email = non_blank(&payload.email).unwrap_or_default();
    ensure_email_free(&state, email, None).await?;

    let now = Utc::now();
    let user = StoredUser {
        id: new_id(),
        name: non_blank(&payload.name).unwrap_or_default().to_string(),
        email: email.to_string(),
        phone: non_blank(&payload.phone).unwrap_or_default().to_string(),
        password: password.to_string(),
        role: Role::parse(non_blank(&payload.role).unwrap_or_default()).to_string(),
        created_at: now,
        updated_at: now,
    };

    tracing::info!(id = %user.id, email = %user.email, "User created");
    state.users.write().await.push(user.clone());

    Ok((
        StatusCode::CREATED,
        Json(UserReply {
            message: "User created successfully".to_string(),
            user,
        }),
    ))
}

/// Update a user; a missing or blank password keeps the current one
async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> AppResult<Json<ApiResponse<()>>> {
    let Json(payload) = payload.map_err(bad_payload)?;
    payload.validate()?;
    let email = non_blank(&payload.email).unwrap_or_default();
    ensure_email_free(&state, email, Some(id.as_str())).await?;

    let mut users = state.users.write().await;
    let user = users
        .iter_mut()
        .find(|u| u.id == id)
        .ok_or_else(|| AppError::with_message(ErrorCode::UserNotFound, "User tidak ditemukan"))?;

    user.name = non_blank(&payload.name).unwrap_or_default().to_string();
    user.email = email.to_string();
    if let Some(phone) = non_blank(&payload.phone) {
        user.phone = phone.to_string();
    }
    if let Some(role) = non_blank(&payload.role) {
        user.role = Role::parse(role).to_string();
    }
    if let Some(password) = non_blank(&payload.password) {
        user.password = password.to_string();
    }
    user.updated_at = Utc::now();

    tracing::info!(%id, "User updated");
    Ok(Json(ApiResponse::ok_with_message("User updated successfully")))
}

/// Delete a user (accepts DELETE and POST)
async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let mut users = state.users.write().await;
    let before = users.len();
    users.retain(|u| u.id != id);
    if users.len() == before {
        return Err(AppError::with_message(
            ErrorCode::UserNotFound,
            "User tidak ditemukan",
        ));
    }

    tracing::info!(%id, "User deleted");
    Ok(Json(ApiResponse::ok_with_message("User deleted successfully")))
}

//! Login endpoint

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::get,
};
use serde::Serialize;
use shared::client::{LoginRequest, MessageBody};
use shared::error::{AppError, AppResult, ErrorCode};

use crate::state::{SharedState, StoredUser};

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/login", get(index))
        .route("/login/do-login", axum::routing::post(login))
}

#[derive(Debug, Serialize)]
struct LoginReply {
    message: String,
    user: StoredUser,
}

async fn index() -> Json<MessageBody> {
    Json(MessageBody::message("masukkan email dan password"))
}

async fn login(
    State(state): State<SharedState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<LoginReply>> {
    let Json(req) = payload.map_err(|_| AppError::invalid_request("Invalid request payload"))?;

    let user = state
        .find_user_by_email(req.email.trim())
        .await
        .ok_or_else(|| AppError::with_message(ErrorCode::EmailNotFound, "Email tidak ditemukan"))?;

    if user.password != req.password {
        tracing::warn!(email = %req.email, "Login rejected: wrong password");
        return Err(AppError::invalid_credentials("Password salah"));
    }

    tracing::info!(email = %user.email, role = %user.role, "Login succeeded");
    Ok(Json(LoginReply {
        message: "Login berhasil".to_string(),
        user,
    }))
}

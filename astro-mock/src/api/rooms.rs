//! Room API Handlers
//!
//! Create and update take multipart form data. Image parts named `images`
//! are either uploaded files (stored in memory and served back under
//! `/uploads/rooms/`) or plain text URLs.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Multipart, Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::RoomStatus;
use shared::validation::{MAX_NAME_LEN, validate_required_text};
use shared::ApiResponse;
use std::collections::HashMap;
use std::str::FromStr;

use crate::state::{MockState, NamedRef, SharedState, StoredRoom, StoredUpload, new_id};

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/admin/room", get(list))
        .route("/admin/create-room", post(create))
        .route("/admin/edit-room/{id}", post(update))
        .route("/admin/delete-room/{id}", post(delete).delete(delete))
        .route("/uploads/rooms/{file}", get(serve_upload))
}

/// Parsed multipart room form
#[derive(Debug, Default)]
struct RoomForm {
    text: HashMap<String, String>,
    facilities: Vec<String>,
    images: Vec<String>,
}

impl RoomForm {
    fn get(&self, key: &str) -> &str {
        self.text.get(key).map(|s| s.trim()).unwrap_or("")
    }

    fn decimal(&self, key: &str) -> AppResult<Option<Decimal>> {
        let raw = self.get(key);
        if raw.is_empty() {
            return Ok(None);
        }
        Decimal::from_str(raw).map(Some).map_err(|_| {
            AppError::with_message(ErrorCode::RoomFormInvalid, format!("Harga tidak valid: {raw}"))
                .with_detail("field", key)
        })
    }

    fn weekday_price(&self) -> AppResult<Decimal> {
        Ok(self
            .decimal("price_per_night")?
            .or(self.decimal("price")?)
            .unwrap_or(Decimal::ZERO))
    }

    fn status(&self) -> RoomStatus {
        self.get("status").parse().unwrap_or_default()
    }

    fn room_type(&self) -> Vec<NamedRef> {
        match self.get("type") {
            "" => Vec::new(),
            t => vec![NamedRef::new(t)],
        }
    }

    fn apply(&self, room: &mut StoredRoom) -> AppResult<()> {
        let weekday = self.weekday_price()?;
        let status = self.status();
        room.name = self.get("name").to_string();
        room.description = self.get("description").to_string();
        room.room_number = self.get("room_number").to_string();
        room.price_per_night = weekday;
        room.price_weekend = self.decimal("price_weekend")?.unwrap_or(weekday);
        room.bed_type = self.get("bed_type").to_string();
        room.capacity = self.get("capacity").parse().unwrap_or(0);
        room.category = self.get("category").to_string();
        room.availability = status == RoomStatus::Available;
        room.status = status.to_string();
        room.room_type = self.room_type();
        room.facilities = self.facilities.iter().map(NamedRef::new).collect();
        room.updated_at = Utc::now();
        Ok(())
    }
}

fn form_error(e: impl std::fmt::Display) -> AppError {
    AppError::with_message(
        ErrorCode::RoomFormInvalid,
        format!("Form-data tidak valid, gunakan multipart/form-data ({e})"),
    )
}

async fn store_upload(state: &MockState, file_name: &str, content_type: String, bytes: Bytes) -> String {
    let ext = std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();
    let path = format!("/uploads/rooms/{}{}", new_id(), ext);
    tracing::info!(original_name = %file_name, size = bytes.len(), %path, "Image uploaded");
    state.uploads.write().await.insert(
        path.clone(),
        StoredUpload {
            content_type,
            bytes: bytes.to_vec(),
        },
    );
    path
}

async fn read_form(state: &MockState, mut multipart: Multipart) -> AppResult<RoomForm> {
    let mut form = RoomForm::default();

    while let Some(field) = multipart.next_field().await.map_err(form_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "images" => {
                if let Some(file_name) = field.file_name().map(str::to_string) {
                    let content_type = field.content_type().map(str::to_string).unwrap_or_else(|| {
                        mime_guess::from_path(&file_name)
                            .first_or_octet_stream()
                            .to_string()
                    });
                    let bytes = field.bytes().await.map_err(form_error)?;
                    if bytes.is_empty() {
                        continue;
                    }
                    let path = store_upload(state, &file_name, content_type, bytes).await;
                    form.images.push(path);
                } else {
                    let url = field.text().await.map_err(form_error)?;
                    if !url.trim().is_empty() {
                        form.images.push(url.trim().to_string());
                    }
                }
            }
            "facilities" | "facilities_id" => {
                let label = field.text().await.map_err(form_error)?;
                if !label.trim().is_empty() {
                    form.facilities.push(label.trim().to_string());
                }
            }
            _ => {
                let value = field.text().await.map_err(form_error)?;
                form.text.insert(name, value);
            }
        }
    }

    Ok(form)
}

/// List all rooms
async fn list(State(state): State<SharedState>) -> Response {
    if state.nil_lists() {
        return Json(serde_json::Value::Null).into_response();
    }
    Json(state.rooms.read().await.clone()).into_response()
}

/// Create a room; at least one image is required
async fn create(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ApiResponse<()>>)> {
    let form = read_form(&state, multipart).await?;
    validate_required_text(form.get("name"), "name", MAX_NAME_LEN)?;
    if form.images.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RoomImageRequired,
            "Minimal upload 1 gambar",
        ));
    }

    let now = Utc::now();
    let mut room = StoredRoom {
        id: new_id(),
        name: String::new(),
        description: String::new(),
        room_number: String::new(),
        price_per_night: Decimal::ZERO,
        price_weekend: Decimal::ZERO,
        images: form.images.clone(),
        bed_type: String::new(),
        capacity: 0,
        availability: true,
        status: RoomStatus::Available.to_string(),
        category: String::new(),
        created_at: now,
        updated_at: now,
        room_type: Vec::new(),
        facilities: Vec::new(),
    };
    form.apply(&mut room)?;

    tracing::info!(id = %room.id, name = %room.name, "Room created");
    state.rooms.write().await.push(room);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message("Room berhasil dibuat!")),
    ))
}

/// Update a room; images are replaced only when new ones are sent
async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<ApiResponse<()>>> {
    let form = read_form(&state, multipart).await?;
    validate_required_text(form.get("name"), "name", MAX_NAME_LEN)?;

    let mut rooms = state.rooms.write().await;
    let room = rooms
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::with_message(ErrorCode::RoomNotFound, "Room tidak ditemukan"))?;

    form.apply(room)?;
    if !form.images.is_empty() {
        room.images = form.images.clone();
    }

    tracing::info!(%id, "Room updated");
    Ok(Json(ApiResponse::ok_with_message("Room updated successfully")))
}

/// Delete a room (accepts DELETE and POST)
async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let mut rooms = state.rooms.write().await;
    let before = rooms.len();
    rooms.retain(|r| r.id != id);
    if rooms.len() == before {
        return Err(AppError::with_message(
            ErrorCode::RoomNotFound,
            "Room tidak ditemukan",
        ));
    }

    tracing::info!(%id, "Room deleted");
    Ok(Json(ApiResponse::ok_with_message("Room deleted")))
}

async fn serve_upload(
    State(state): State<SharedState>,
    Path(file): Path<String>,
) -> AppResult<Response> {
    let key = format!("/uploads/rooms/{file}");
    let uploads = state.uploads.read().await;
    let upload = uploads
        .get(&key)
        .ok_or_else(|| AppError::not_found(format!("Image {file}")))?;
    Ok((
        [(header::CONTENT_TYPE, upload.content_type.clone())],
        upload.bytes.clone(),
    )
        .into_response())
}

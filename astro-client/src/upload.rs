//! Loading local image files for room uploads

use shared::error::{AppError, ErrorCode};
use shared::models::ImageUpload;
use std::path::Path;

use crate::ClientResult;

/// Maximum file size (5MB)
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Read an image file and guess its content type from the extension
pub async fn load_image(path: impl AsRef<Path>) -> ClientResult<ImageUpload> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    if mime.type_() != mime_guess::mime::IMAGE {
        return Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("{file_name} bukan file gambar"),
        )
        .into());
    }
    if bytes.is_empty() {
        return Err(AppError::with_message(ErrorCode::InvalidFormat, format!("{file_name} kosong")).into());
    }
    if bytes.len() > MAX_FILE_SIZE {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{file_name} terlalu besar (maks {} MB)", MAX_FILE_SIZE / 1024 / 1024),
        )
        .into());
    }

    tracing::debug!(%file_name, size = bytes.len(), %mime, "Image loaded");
    Ok(ImageUpload {
        file_name,
        content_type: mime.to_string(),
        bytes,
    })
}

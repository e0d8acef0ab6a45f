//! Multipart encoding of room drafts

use reqwest::multipart::{Form, Part};
use shared::error::{AppError, ErrorCode};
use shared::models::{ImageSource, RoomDraft};

use crate::ClientResult;

/// Text fields of a room form in send order
///
/// The weekday price goes out as both `price` (read on create) and
/// `price_per_night` (read on update).
pub fn room_text_fields(draft: &RoomDraft) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("name", draft.name.trim().to_string()),
        ("description", draft.description.trim().to_string()),
        ("room_number", draft.room_number.trim().to_string()),
        ("price", draft.price_weekday.to_string()),
        ("price_per_night", draft.price_weekday.to_string()),
        ("price_weekend", draft.price_weekend.to_string()),
        ("type", draft.room_type.trim().to_string()),
        ("capacity", draft.capacity.to_string()),
        ("bed_type", draft.bed.trim().to_string()),
        ("category", draft.category.trim().to_string()),
        ("status", draft.status.to_string()),
    ];
    fields.extend(
        draft
            .facilities
            .iter()
            .map(|f| ("facilities", f.clone())),
    );
    fields
}

/// Build the multipart body for create/update
pub fn room_form(draft: &RoomDraft) -> ClientResult<Form> {
    let mut form = Form::new();
    for (name, value) in room_text_fields(draft) {
        form = form.text(name, value);
    }

    for image in &draft.images {
        form = match image {
            ImageSource::Upload(upload) => {
                let part = Part::bytes(upload.bytes.clone())
                    .file_name(upload.file_name.clone())
                    .mime_str(&upload.content_type)
                    .map_err(|_| {
                        AppError::with_message(
                            ErrorCode::InvalidFormat,
                            format!(
                                "{}: tipe konten tidak valid ({})",
                                upload.file_name, upload.content_type
                            ),
                        )
                    })?;
                form.part("images", part)
            }
            ImageSource::Url(url) => form.text("images", url.clone()),
        };
    }

    Ok(form)
}

use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    routing::{delete, post},
    Json, Router,
};
use serde_json::{json, Value};
use weddingsite_core::{constants::HERO_PHOTO_KEY, photos::PhotoUpload};

const DEFAULT_MIME: &str = "application/octet-stream";

fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(err.body_text())
    } else {
        ApiError::BadRequest(format!("Failed to read multipart field: {}", err.body_text()))
    }
}

/// Form fields: `photo` (the file) and `slot` (defaults to the hero slot).
async fn upload_photo(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<Json<Value>> {
    let mut slot: Option<String> = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "slot" => {
                slot = Some(field.text().await.map_err(multipart_error)?);
            }
            "photo" => {
                let mime_type = field.content_type().unwrap_or(DEFAULT_MIME).to_string();
                let has_name = field.file_name().is_some_and(|f| !f.is_empty());
                let bytes = field.bytes().await.map_err(multipart_error)?;
                // Browsers send an empty nameless part when no file was picked.
                if has_name || !bytes.is_empty() {
                    file = Some((mime_type, bytes.to_vec()));
                }
            }
            _ => {}
        }
    }

    let (mime_type, bytes) = file.ok_or_else(|| ApiError::BadRequest("No file".to_string()))?;
    let slot = slot
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| HERO_PHOTO_KEY.to_string());

    let stored = state
        .photo_service
        .upload_photo(PhotoUpload {
            slot,
            mime_type,
            bytes,
        })
        .await?;
    Ok(Json(json!({ "ok": true, "slot": stored })))
}

async fn remove_photo(
    Path(slot): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    state.photo_service.remove_photo(&slot).await?;
    Ok(Json(json!({ "ok": true })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/settings/photo", post(upload_photo))
        .route("/settings/photo/{slot}", delete(remove_photo))
}

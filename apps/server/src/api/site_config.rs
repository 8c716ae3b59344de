use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{RawQuery, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use weddingsite_core::settings::Settings;

/// First non-empty `full` value wins; repeats and unrelated pairs are ignored.
fn wants_full(query: Option<&str>) -> bool {
    query
        .and_then(|q| serde_urlencoded::from_str::<Vec<(String, String)>>(q).ok())
        .and_then(|pairs| pairs.into_iter().find(|(k, _)| k == "full"))
        .is_some_and(|(_, v)| !v.is_empty())
}

/// Photo slots are included only when `full` carries a value.
async fn get_config(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Settings>> {
    let include_photos = wants_full(query.as_deref());
    let settings = state.settings_service.get_public_settings(include_photos)?;
    Ok(Json(settings))
}

async fn get_hero(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let hero = state.photo_service.get_hero()?;
    Ok(Json(json!({ "hero_photo": hero })))
}

async fn get_gallery(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let photos = state.photo_service.list_gallery()?;
    Ok(Json(json!({ "photos": photos })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/config", get(get_config))
        .route("/config/hero", get(get_hero))
        .route("/config/gallery", get(get_gallery))
}

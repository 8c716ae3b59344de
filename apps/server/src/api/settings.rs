use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

/// Stores every key of the posted object. Unknown keys are accepted.
async fn update_settings(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(payload) = payload?;
    let Value::Object(update) = payload else {
        return Err(ApiError::BadRequest(
            "Settings body must be a JSON object".to_string(),
        ));
    };
    state.settings_service.update_settings(&update).await?;
    tracing::info!("Updated {} setting(s)", update.len());
    Ok(Json(json!({ "ok": true })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/settings", post(update_settings))
}

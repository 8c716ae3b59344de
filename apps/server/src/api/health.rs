use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Router};

async fn healthz() -> &'static str {
    "ok"
}

/// Ready once the settings table answers.
async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    state.settings_service.get_setting_value("name1")?;
    Ok("ok")
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}

use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};

async fn export_rsvps(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let csv = state.rsvp_service.export_csv()?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"rsvps.csv\""),
        ],
        csv,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/export.csv", get(export_rsvps))
}

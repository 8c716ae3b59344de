use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use weddingsite_core::{
    notifications::NotificationOutcome,
    rsvps::{Rsvp, RsvpStats, RsvpSubmission},
    Error as CoreError,
};

const GENERIC_FAILURE: &str = "Something went wrong.";

/// Guest-facing submission. Storage failures are not shown to guests.
async fn submit_rsvp(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RsvpSubmission>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(submission) = payload?;
    let rsvp = state
        .rsvp_service
        .create_rsvp(submission)
        .await
        .map_err(|err| match err {
            CoreError::Validation(_) => ApiError::Core(err),
            other => {
                tracing::error!("RSVP submission failed: {}", other);
                ApiError::Internal(GENERIC_FAILURE.to_string())
            }
        })?;

    let id = rsvp.id;
    tokio::spawn(notify_coordinator(state, rsvp));

    Ok(Json(json!({ "ok": true, "id": id })))
}

/// Runs detached from the request; every outcome ends here.
async fn notify_coordinator(state: Arc<AppState>, rsvp: Rsvp) {
    let settings = match state.settings_service.get_settings() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("RSVP {} email skipped, settings unavailable: {}", rsvp.id, err);
            return;
        }
    };
    match state
        .notification_service
        .notify_new_rsvp(&rsvp, &settings)
        .await
    {
        Ok(NotificationOutcome::Sent { to }) => {
            tracing::info!("RSVP {} email sent to {}", rsvp.id, to)
        }
        Ok(NotificationOutcome::Skipped(reason)) => {
            tracing::debug!("RSVP {} email skipped: {:?}", rsvp.id, reason)
        }
        Err(err) => tracing::warn!("RSVP {} email failed: {}", rsvp.id, err),
    }
}

async fn list_rsvps(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Rsvp>>> {
    let rsvps = state.rsvp_service.get_rsvps()?;
    Ok(Json(rsvps))
}

async fn delete_rsvp(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    let rsvp_id: i32 = id
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid RSVP id".to_string()))?;
    state.rsvp_service.delete_rsvp(rsvp_id).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn get_stats(State(state): State<Arc<AppState>>) -> ApiResult<Json<RsvpStats>> {
    let stats = state.rsvp_service.get_stats()?;
    Ok(Json(stats))
}

pub fn public_router() -> Router<Arc<AppState>> {
    Router::new().route("/rsvp", post(submit_rsvp))
}

pub fn dashboard_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rsvps", get(list_rsvps))
        .route("/rsvps/{id}", delete(delete_rsvp))
        .route("/stats", get(get_stats))
}

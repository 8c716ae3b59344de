//! Shared-secret gate for the coordinator dashboard.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::main_lib::AppState;

pub const DASHBOARD_TOKEN_HEADER: &str = "x-dashboard-token";

/// Compares presented tokens against the single configured secret.
#[derive(Clone)]
pub struct AdminGate {
    secret: Option<String>,
}

#[derive(Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

impl AdminGate {
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    pub fn verify(&self, candidate: Option<&str>) -> Result<(), ApiError> {
        match (self.secret.as_deref(), candidate) {
            (Some(secret), Some(candidate)) if candidate == secret => Ok(()),
            _ => Err(ApiError::Unauthorized),
        }
    }
}

/// Header first, then the `token` query parameter.
fn presented_token(headers: &HeaderMap, query: Option<&str>) -> Option<String> {
    headers
        .get(DASHBOARD_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .or_else(|| {
            query
                .and_then(|q| serde_urlencoded::from_str::<TokenQuery>(q).ok())
                .and_then(|q| q.token)
        })
}

pub async fn require_dashboard_token(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = presented_token(request.headers(), request.uri().query());
    if let Err(err) = state.admin_gate.verify(token.as_deref()) {
        tracing::debug!("rejected dashboard request to {}", request.uri().path());
        return Err(err);
    }
    Ok(next.run(request).await)
}

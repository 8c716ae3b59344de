use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::HeaderValue, middleware, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{auth::require_dashboard_token, config::Config, main_lib::AppState};

mod export;
mod health;
mod photos;
mod rsvps;
mod settings;
mod site_config;

/// Large enough for an 8 MiB photo after multipart framing.
pub const MAX_BODY_BYTES: usize = 15 * 1024 * 1024;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let dashboard = Router::new()
        .merge(rsvps::dashboard_router())
        .merge(settings::router())
        .merge(photos::router())
        .merge(export::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_dashboard_token,
        ));

    let api = Router::new()
        .merge(health::router())
        .merge(site_config::router())
        .merge(rsvps::public_router())
        .merge(dashboard);

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}

/// The API plus the site's static files; unknown paths fall back to `index.html`.
pub fn site_router(state: Arc<AppState>, config: &Config) -> Router {
    let static_dir = std::path::PathBuf::from(&config.static_dir);
    let index_file = static_dir.join("index.html");
    let static_service = ServeDir::new(static_dir).fallback(ServeFile::new(index_file));
    app_router(state, config).fallback_service(static_service)
}

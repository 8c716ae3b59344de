#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use tempfile::TempDir;
use tower::ServiceExt;
use weddingsite_core::notifications::{MailTransport, NotificationService};
use weddingsite_server::{api::app_router, build_state, config::Config, AppState};

pub const TOKEN: &str = "let-me-in";
pub const BOUNDARY: &str = "weddingsite-test-boundary";

pub struct TestApp {
    pub router: Router,
    _dir: TempDir,
}

pub fn test_config(dir: &TempDir, password: Option<&str>) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: dir.path().join("wedding.db").to_string_lossy().into_owned(),
        dashboard_password: password.map(str::to_string),
        mail: None,
        notify_email: None,
        site_url: "https://wedding.test".to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        static_dir: dir.path().to_string_lossy().into_owned(),
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_password(Some(TOKEN)).await
}

pub async fn spawn_app_with_password(password: Option<&str>) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, password);
    let state = build_state(&config).await.unwrap();
    TestApp {
        router: app_router(state, &config),
        _dir: dir,
    }
}

/// Same app, but coordinator emails go through `transport` to `notify_to`.
pub async fn spawn_app_with_transport(transport: Arc<dyn MailTransport>, notify_to: &str) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, Some(TOKEN));
    let base = build_state(&config).await.unwrap();
    let state = Arc::new(AppState {
        settings_service: base.settings_service.clone(),
        rsvp_service: base.rsvp_service.clone(),
        photo_service: base.photo_service.clone(),
        notification_service: Arc::new(NotificationService::new(
            Some(transport),
            Some(notify_to.to_string()),
            config.site_url.clone(),
        )),
        admin_gate: base.admin_gate.clone(),
    });
    TestApp {
        router: app_router(state, &config),
        _dir: dir,
    }
}

impl TestApp {
    pub fn from_router(router: Router, dir: TempDir) -> Self {
        TestApp { router, _dir: dir }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, body)
    }

    pub async fn json(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let (status, _, body) = self.send(request).await;
        let value = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, value)
    }

    pub async fn submit_rsvp(&self, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.json(post_json("/api/rsvp", &body, None)).await
    }
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    with_token(Request::builder().method(Method::GET).uri(uri), token)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str, token: Option<&str>) -> Request<Body> {
    with_token(Request::builder().method(Method::DELETE).uri(uri), token)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value, token: Option<&str>) -> Request<Body> {
    with_token(Request::builder().method(Method::POST).uri(uri), token)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// A `multipart/form-data` POST. `file` is `(mime, bytes)` for the `photo` part.
pub fn post_photo(slot: Option<&str>, file: Option<(&str, &[u8])>, token: Option<&str>) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();
    if let Some(slot) = slot {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"slot\"\r\n\r\n{slot}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((mime, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"photo\"; filename=\"photo.jpg\"\r\nContent-Type: {mime}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    with_token(
        Request::builder().method(Method::POST).uri("/api/settings/photo"),
        token,
    )
    .header(
        "content-type",
        format!("multipart/form-data; boundary={BOUNDARY}"),
    )
    .body(Body::from(body))
    .unwrap()
}

fn with_token(
    builder: axum::http::request::Builder,
    token: Option<&str>,
) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header("x-dashboard-token", token),
        None => builder,
    }
}

mod common;

use axum::http::StatusCode;
use common::{get, test_config, TestApp};
use weddingsite_server::{api::site_router, build_state};

#[tokio::test]
async fn serves_site_files_next_to_the_api() {
    let dir = tempfile::tempdir().unwrap();
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(static_dir.path().join("index.html"), "<html>home</html>").unwrap();
    std::fs::write(
        static_dir.path().join("dashboard.html"),
        "<html>dashboard</html>",
    )
    .unwrap();

    let mut config = test_config(&dir, Some("pw"));
    config.static_dir = static_dir.path().to_string_lossy().into_owned();
    let state = build_state(&config).await.unwrap();
    let router = site_router(state, &config);
    let app = TestApp::from_router(router, dir);

    let (status, _, body) = app.send(get("/dashboard.html", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"<html>dashboard</html>");

    let (status, _, body) = app.send(get("/somewhere/else", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"<html>home</html>");

    let (status, _, body) = app.send(get("/api/healthz", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"ok");
}

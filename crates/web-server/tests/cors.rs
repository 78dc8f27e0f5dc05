use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use configuration::CorsSettings;
use std::sync::Arc;
use tower::util::ServiceExt;
use web_server::{AppState, build_router};

mod common;

fn app(origins: &[&str]) -> axum::Router {
    let cors = CorsSettings {
        allowed_origins: origins.iter().map(|o| o.to_string()).collect(),
    };
    build_router(AppState::new(Arc::new(common::sample_source())), &cors)
}

async fn allow_origin_for(app: axum::Router, origin: &str) -> Option<String> {
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/pokemon/")
                .header(header::ORIGIN, origin)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .map(|v| v.to_str().unwrap().to_string())
}

#[tokio::test]
async fn any_origin_when_unconfigured() {
    let allowed = allow_origin_for(app(&[]), "http://localhost:3000").await;
    assert_eq!(allowed.as_deref(), Some("*"));
}

#[tokio::test]
async fn configured_origins_are_echoed() {
    let allowed = allow_origin_for(app(&["http://localhost:3000"]), "http://localhost:3000").await;
    assert_eq!(allowed.as_deref(), Some("http://localhost:3000"));
}

#[tokio::test]
async fn other_origins_get_no_cors_header() {
    let allowed = allow_origin_for(app(&["http://localhost:3000"]), "http://evil.example").await;
    assert_eq!(allowed, None);
}

//! Router-level tests for the public HTTP surface.
//!
//! Run with: cargo test --test api

use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request, Response, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use wuloye_ai_service::api::{create_router, AppState, HEALTH_PATH};
use wuloye_ai_service::config::{AllowedOrigins, Config};

const HEALTH_BODY: &str = r#"{"status":"AI Service Running"}"#;

fn permissive_app() -> Router {
    create_router(AppState::new(), &AllowedOrigins::Any)
}

async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn get_health_without_headers() {
    let response = permissive_app()
        .oneshot(Request::builder().uri(HEALTH_PATH).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(body_string(response).await, HEALTH_BODY);
}

#[tokio::test]
async fn get_health_ignores_query_headers_and_body() {
    let response = permissive_app()
        .oneshot(
            Request::builder()
                .uri("/api/health?verbose=true&model=latest")
                .header(header::AUTHORIZATION, "Bearer token")
                .header(header::CONTENT_TYPE, "application/json")
                .header("x-request-id", "abc-123")
                .body(Body::from(r#"{"ignored": true}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, HEALTH_BODY);
}

#[tokio::test]
async fn other_methods_on_health_are_rejected() {
    for method in [
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
    ] {
        let response = permissive_app()
            .oneshot(
                Request::builder()
                    .method(method.clone())
                    .uri(HEALTH_PATH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "{method} should not be accepted"
        );
        assert_eq!(
            body_string(response).await,
            r#"{"detail":"Method Not Allowed"}"#
        );
    }
}

#[tokio::test]
async fn head_on_health_is_rejected() {
    let response = permissive_app()
        .oneshot(
            Request::builder()
                .method(Method::HEAD)
                .uri(HEALTH_PATH)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[header::ALLOW], "GET");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = permissive_app()
        .oneshot(
            Request::builder()
                .uri("/api/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, r#"{"detail":"Not Found"}"#);
}

#[tokio::test]
async fn preflight_accepts_any_origin() {
    let response = permissive_app()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri(HEALTH_PATH)
                .header(header::ORIGIN, "https://frontend.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://frontend.example"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "authorization");
}

#[tokio::test]
async fn simple_request_reflects_origin() {
    let response = permissive_app()
        .oneshot(
            Request::builder()
                .uri(HEALTH_PATH)
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn restricted_origins_only_allow_listed() {
    let config = Config {
        allowed_origins: "https://app.wuloye.com".to_string(),
        ..Config::default()
    };
    let origins = config.origins().unwrap();
    assert_eq!(
        origins,
        AllowedOrigins::List(vec![HeaderValue::from_static("https://app.wuloye.com")])
    );
    let app = create_router(AppState::new(), &origins);

    let allowed = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(HEALTH_PATH)
                .header(header::ORIGIN, "https://app.wuloye.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://app.wuloye.com"
    );

    let denied = app
        .oneshot(
            Request::builder()
                .uri(HEALTH_PATH)
                .header(header::ORIGIN, "https://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(denied.status(), StatusCode::OK);
    assert!(denied
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn openapi_document_lists_health() {
    let response = permissive_app()
        .oneshot(
            Request::builder()
                .uri("/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(doc["info"]["title"], "Wuloye AI Service");
    assert!(doc["paths"]["/api/health"]["get"].is_object());
}

#[tokio::test]
async fn documentation_pages_are_served() {
    let swagger = permissive_app()
        .oneshot(Request::builder().uri("/docs/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(swagger.status(), StatusCode::OK);

    let redoc = permissive_app()
        .oneshot(Request::builder().uri("/redoc").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(redoc.status(), StatusCode::OK);
    assert!(redoc.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(body_string(redoc).await.contains("<redoc"));
}

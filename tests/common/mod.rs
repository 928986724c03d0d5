#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use gradeportal::gradeportal_access::Principal;
use gradeportal::gradeportal_auth::create_access_token;
use gradeportal::gradeportal_config::{CorsConfig, JwtConfig};
use gradeportal::gradeportal_core::{Permission, PermissionSet, Role};
use gradeportal::router::init_router;
use gradeportal::state::AppState;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-at-least-32-chars".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn setup_test_app() -> axum::Router {
    let state = AppState {
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig::from_list("http://localhost:5173"),
        metrics: None,
    };
    init_router(state)
}

pub fn principal(role: Role, permissions: &[Permission], department: Option<&str>) -> Principal {
    Principal::new(Uuid::new_v4(), "Test Principal", role)
        .with_email("principal@uni.test")
        .with_permissions(PermissionSet::of(permissions))
        .with_department(department)
}

pub fn token_for(principal: &Principal) -> String {
    create_access_token(principal, &test_jwt_config()).unwrap()
}

/// Sends a GET, with a bearer token when one is given.
pub async fn get(uri: &str, token: Option<&str>) -> Response<Body> {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        request = request.header("Authorization", format!("Bearer {}", token));
    }

    setup_test_app()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

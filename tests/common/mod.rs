#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use gatehouse::routes::{self, AppState};
use gatehouse_session::{Credential, Gatekeeper, TracingAuditSink};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const EMAIL: &str = "analyst@example.com";
pub const PASSWORD: &str = "ChangeMe!123";
pub const SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub fn create_test_app() -> Router {
    let credential = Credential::from_password(EMAIL, PASSWORD).unwrap();
    let gatekeeper = Gatekeeper::new(credential, SECRET, Arc::new(TracingAuditSink));

    routes::router(AppState { gatekeeper })
}

pub async fn get(router: &Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    router
        .clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_login(router: &Router, email: &str, password: &str) -> Response {
    let body = serde_urlencoded::to_string([("email", email), ("password", password)]).unwrap();

    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header("content-type", "application/x-www-form-urlencoded")
                .header("x-forwarded-for", "203.0.113.9")
                .header(header::USER_AGENT, "gatehouse-tests")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// `name=value` part of the session set-cookie header, if one was set.
pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|value| value.to_owned())
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

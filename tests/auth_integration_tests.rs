use axum::http::{StatusCode, header};

mod common;

#[tokio::test]
async fn test_login_with_valid_credentials_redirects_home() {
    let app = common::create_test_app();

    let response = common::post_login(&app, common::EMAIL, common::PASSWORD).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Strict"));
    // Browser-session cookie: no explicit expiry.
    assert!(!set_cookie.contains("Max-Age"));
    assert!(!set_cookie.contains("Expires"));
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let app = common::create_test_app();

    let response = common::post_login(&app, "ANALYST@EXAMPLE.COM", common::PASSWORD).await;

    assert_eq!(response.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn test_login_with_wrong_password_rerenders_form() {
    let app = common::create_test_app();

    let response = common::post_login(&app, common::EMAIL, "WrongPassword").await;

    assert_eq!(response.status(), StatusCode::OK);
    // No session cookie on failure
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let body = common::body_string(response).await;
    assert!(body.contains("Invalid email or password"));
    assert!(body.contains("<form"));
}

#[tokio::test]
async fn test_login_with_unknown_email_rerenders_form() {
    let app = common::create_test_app();

    let response = common::post_login(&app, "intruder@example.com", common::PASSWORD).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    // Same message as a wrong password: no user enumeration via responses.
    let body = common::body_string(response).await;
    assert!(body.contains("Invalid email or password"));
}

#[tokio::test]
async fn test_login_page_renders_form() {
    let app = common::create_test_app();

    let response = common::get(&app, "/login", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains(r#"<form method="post" action="/login""#));
}

#[tokio::test]
async fn test_home_without_session_redirects_to_login() {
    let app = common::create_test_app();

    let response = common::get(&app, "/", None).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn test_home_with_session_shows_identity() {
    let app = common::create_test_app();

    let login = common::post_login(&app, common::EMAIL, common::PASSWORD).await;
    let cookie = common::session_cookie(&login).unwrap();

    let response = common::get(&app, "/", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains(common::EMAIL));
}

#[tokio::test]
async fn test_tampered_cookie_is_treated_as_anonymous() {
    let app = common::create_test_app();

    let login = common::post_login(&app, common::EMAIL, common::PASSWORD).await;
    let cookie = common::session_cookie(&login).unwrap();

    // Flip the last character of the token.
    let mut tampered = cookie.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let response = common::get(&app, "/", Some(&tampered)).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn test_garbage_cookie_is_treated_as_anonymous() {
    let app = common::create_test_app();

    let response = common::get(&app, "/", Some("session=definitely-not-a-token")).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn test_logout_clears_session_and_redirects_to_login() {
    let app = common::create_test_app();

    let login = common::post_login(&app, common::EMAIL, common::PASSWORD).await;
    let cookie = common::session_cookie(&login).unwrap();

    let response = common::get(&app, "/logout", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");

    // Removal cookie: value cleared, expiry in the past.
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("session=;"));

    // Without the cookie the browser is anonymous again.
    let home = common::get(&app, "/", None).await;
    assert_eq!(home.status(), StatusCode::FOUND);
    assert_eq!(home.headers().get(header::LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn test_logout_without_session_still_redirects() {
    let app = common::create_test_app();

    let response = common::get(&app, "/logout", None).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn test_full_session_lifecycle() {
    let app = common::create_test_app();

    // Anonymous: home bounces to login.
    let home = common::get(&app, "/", None).await;
    assert_eq!(home.status(), StatusCode::FOUND);

    // Authenticate.
    let login = common::post_login(&app, common::EMAIL, common::PASSWORD).await;
    assert_eq!(login.status(), StatusCode::FOUND);
    assert_eq!(login.headers().get(header::LOCATION).unwrap(), "/");
    let cookie = common::session_cookie(&login).unwrap();

    // Authenticated: home shows the identity.
    let home = common::get(&app, "/", Some(&cookie)).await;
    assert_eq!(home.status(), StatusCode::OK);
    assert!(common::body_string(home).await.contains(common::EMAIL));

    // Back to anonymous.
    let logout = common::get(&app, "/logout", Some(&cookie)).await;
    assert_eq!(logout.status(), StatusCode::FOUND);
    assert_eq!(logout.headers().get(header::LOCATION).unwrap(), "/login");

    // Ready to re-authenticate.
    let login = common::post_login(&app, common::EMAIL, common::PASSWORD).await;
    assert_eq!(login.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn test_unknown_path_returns_404_page() {
    let app = common::create_test_app();

    let response = common::get(&app, "/does-not-exist", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = common::body_string(response).await;
    assert!(body.contains("Not found"));
}

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
    response::Response,
};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use gatehouse_session::Session;

use crate::routes::{AppState, redirect_to};

pub const SESSION_COOKIE_NAME: &str = "session";

/// Build the session cookie. No max-age: the cookie lives for the browser
/// session, and the token inside carries no expiry of its own.
pub fn build_session_cookie<'a>(token: String) -> Cookie<'a> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build()
}

/// Removal cookie with the same path as [`build_session_cookie`].
pub fn clear_session_cookie<'a>() -> Cookie<'a> {
    Cookie::build((SESSION_COOKIE_NAME, "")).path("/").build()
}

/// Extractor for handlers behind the login wall. Missing, malformed or
/// tampered cookies all reject to the login redirect; none of them is an
/// error.
pub struct AuthUser(pub Session);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| redirect_to("/login"))?;

        let token = jar
            .get(SESSION_COOKIE_NAME)
            .map(|cookie| cookie.value())
            .ok_or_else(|| redirect_to("/login"))?;

        let Some(session) = state.gatekeeper.validate_session(token) else {
            return Err(redirect_to("/login"));
        };

        Ok(AuthUser(session))
    }
}

/// Request metadata that flows into audit events. Client address comes from
/// the first `x-forwarded-for` hop; both fields are best-effort.
pub struct ClientInfo {
    pub addr: Option<String>,
    pub user_agent: Option<String>,
}

impl<S> FromRequestParts<S> for ClientInfo
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let addr = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());

        let user_agent = parts
            .headers
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_owned());

        Ok(Self { addr, user_agent })
    }
}

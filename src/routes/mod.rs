use askama::Template;
use axum::{
    Router,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use gatehouse_session::Gatekeeper;

use crate::template::NotFoundTemplate;

mod health;
mod index;
mod login;

#[derive(Clone)]
pub struct AppState {
    pub gatekeeper: Gatekeeper,
}

/// 302 with a Location header.
pub(crate) fn redirect_to(path: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, path)]).into_response()
}

pub async fn fallback() -> Response {
    match NotFoundTemplate.render() {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render 404 page: {:?}", e);
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::page))
        .route("/login", get(login::page).post(login::action))
        .route("/logout", get(login::logout))
        .route("/healthz", get(health::healthz))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(state)
        .layer(axum::middleware::from_fn(
            crate::middleware::security_headers_middleware,
        ))
}

use axum::response::Response;

use crate::auth::AuthUser;
use crate::template::render_template;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub user: String,
}

/// GET / - Home page; anonymous visitors are redirected to the login form
/// by the extractor.
pub async fn page(AuthUser(session): AuthUser) -> Response {
    render_template(IndexTemplate {
        user: session.identity,
    })
}

use axum::{Form, extract::State, response::Response};
use axum_extra::extract::CookieJar;
use gatehouse_session::LoginInput;
use serde::Deserialize;

use crate::auth::{self, ClientInfo};
use crate::routes::{AppState, redirect_to};
use crate::template::render_template;

#[derive(askama::Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error_message: Option<String>,
    pub email: Option<String>,
}

/// GET /login - Show login form
pub async fn page() -> Response {
    render_template(LoginTemplate {
        error_message: None,
        email: None,
    })
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// POST /login - Handle login submission
///
/// On success, establishes the session cookie and redirects home. On any
/// failure the form is re-rendered with a generic message; the response
/// never says whether the email or the password was wrong.
pub async fn action(
    State(state): State<AppState>,
    client: ClientInfo,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> (CookieJar, Response) {
    let session = match state.gatekeeper.authenticate(LoginInput {
        email: form.email.to_owned(),
        password: form.password,
        client_addr: client.addr,
        user_agent: client.user_agent,
    }) {
        Ok(session) => session,
        Err(e) => {
            return (
                jar,
                render_template(LoginTemplate {
                    error_message: Some(e.to_string()),
                    email: Some(form.email),
                }),
            );
        }
    };

    let token = match state.gatekeeper.establish_session(&session) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "Failed to sign session token");
            return (
                jar,
                render_template(LoginTemplate {
                    error_message: Some("An error occurred. Please try again.".to_string()),
                    email: Some(form.email),
                }),
            );
        }
    };

    (jar.add(auth::build_session_cookie(token)), redirect_to("/"))
}

/// GET /logout - Clear session cookie
///
/// A valid session gets a logout audit entry; either way the cookie is
/// removed and the client goes back to the login form.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Response) {
    if let Some(cookie) = jar.get(auth::SESSION_COOKIE_NAME) {
        let _ = state.gatekeeper.terminate_session(cookie.value());
    }

    (
        jar.remove(auth::clear_session_cookie()),
        redirect_to("/login"),
    )
}

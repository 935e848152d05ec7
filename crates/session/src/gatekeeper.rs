use std::sync::Arc;

use validator::Validate;

use crate::audit::{AuditEvent, AuditKind, AuditSink};
use crate::credential::Credential;
use crate::error::AuthError;
use crate::token;

/// The identity asserted by a verified session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub identity: String,
}

/// A login attempt as submitted by the client, plus the request metadata
/// that flows into audit events.
#[derive(Validate)]
pub struct LoginInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub client_addr: Option<String>,
    pub user_agent: Option<String>,
}

/// Decides, per request, whether to admit a login attempt or a presented
/// session token. Holds the one configured credential, the signing secret
/// and the audit sink; all immutable after startup, so cloning is cheap and
/// requests need no coordination.
#[derive(Clone)]
pub struct Gatekeeper {
    credential: Credential,
    signing_secret: String,
    audit: Arc<dyn AuditSink>,
}

impl Gatekeeper {
    pub fn new(
        credential: Credential,
        signing_secret: impl Into<String>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            credential,
            signing_secret: signing_secret.into(),
            audit,
        }
    }

    /// Identity this gatekeeper admits, as configured.
    pub fn identity(&self) -> &str {
        self.credential.email()
    }

    /// Verify a submitted email/password pair.
    ///
    /// Unknown email, malformed email and wrong password all collapse into
    /// `InvalidCredentials`; the audit log records the attempted email
    /// either way. The session identity is the email as submitted (trimmed),
    /// not the configured casing.
    pub fn authenticate(&self, mut input: LoginInput) -> Result<Session, AuthError> {
        input.email = input.email.trim().to_owned();

        let verified = input.validate().is_ok()
            && self.credential.matches_email(&input.email)
            && self.credential.verify_password(&input.password);

        if !verified {
            self.audit.record(
                AuditEvent::now(AuditKind::LoginFailed, input.email)
                    .client_addr(input.client_addr)
                    .user_agent(input.user_agent),
            );
            return Err(AuthError::InvalidCredentials);
        }

        self.audit.record(
            AuditEvent::now(AuditKind::LoginSuccess, input.email.to_owned())
                .client_addr(input.client_addr)
                .user_agent(input.user_agent),
        );

        Ok(Session {
            identity: input.email,
        })
    }

    /// Serialize a session into a signed token for the cookie value.
    pub fn establish_session(&self, session: &Session) -> anyhow::Result<String> {
        token::sign(&self.signing_secret, &session.identity)
    }

    /// Recover the session a presented token asserts, or `None` for
    /// missing/malformed/tampered tokens. No log entry: an invalid token is
    /// simply an anonymous request.
    pub fn validate_session(&self, token: &str) -> Option<Session> {
        token::verify(&self.signing_secret, token).ok()
    }

    /// End the session a presented token asserts. Records a logout audit
    /// event when the token was valid; the web layer clears the cookie
    /// regardless. The token itself stays cryptographically valid until the
    /// signing secret rotates.
    pub fn terminate_session(&self, token: &str) -> Option<Session> {
        let session = self.validate_session(token)?;

        self.audit
            .record(AuditEvent::now(AuditKind::Logout, session.identity.to_owned()));

        Some(session)
    }
}

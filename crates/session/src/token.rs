use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{Session, error::SessionError};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // identity asserted by the session
    iat: u64,    // issued at (UTC timestamp)
}

/// Sign an identity into a tamper-evident session token.
///
/// The token carries no expiry claim: the cookie holding it is a browser
/// session cookie, and rotating the signing secret invalidates everything.
pub fn sign(secret: &str, identity: &str) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let claims = Claims {
        sub: identity.to_owned(),
        iat: now,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Verify a presented token and recover the session it asserts.
///
/// Any malformed, unsigned or tampered token is `SessionError::Invalid`; so
/// is a token whose identity is empty. This never panics on hostile input.
pub fn verify(secret: &str, token: &str) -> Result<Session, SessionError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| SessionError::Invalid)?;

    if token_data.claims.sub.is_empty() {
        return Err(SessionError::Invalid);
    }

    Ok(Session {
        identity: token_data.claims.sub,
    })
}

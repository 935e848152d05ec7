use thiserror::Error;

/// Authentication failures surfaced to the login form.
///
/// Unknown identity and wrong password collapse into one variant so the
/// response never reveals which half of the pair was wrong.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,
}

/// Session token failures. Never shown to the client: an invalid token is
/// treated as "no session".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("invalid session token")]
    Invalid,
}

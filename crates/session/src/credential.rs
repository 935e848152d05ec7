use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

/// The single identity/password pair accepted for login.
///
/// Constructed once at startup from configuration and immutable for the
/// process lifetime. The password is only ever held as an argon2 PHC hash.
#[derive(Debug, Clone)]
pub struct Credential {
    email: String,
    password_hash: String,
}

impl Credential {
    /// Build from an existing argon2 PHC string. The hash is parsed here so
    /// a malformed value fails at startup instead of on the first login.
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> anyhow::Result<Self> {
        let password_hash = password_hash.into();
        PasswordHash::new(&password_hash)?;

        Ok(Self {
            email: email.into(),
            password_hash,
        })
    }

    /// Build from a plaintext demo password, hashing it with a fresh salt.
    pub fn from_password(email: impl Into<String>, password: &str) -> anyhow::Result<Self> {
        let password_hash = hash_password(password)?;

        Ok(Self {
            email: email.into(),
            password_hash,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Case-insensitive identity comparison.
    pub fn matches_email(&self, candidate: &str) -> bool {
        candidate.eq_ignore_ascii_case(&self.email)
    }

    /// Verify a candidate password against the stored hash.
    pub fn verify_password(&self, password: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.password_hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

/// Hash a password into an argon2 PHC string with a random salt.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string();

    Ok(password_hash)
}

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use gatehouse_session::Credential;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// The single identity accepted for login.
    #[serde(default = "default_email")]
    pub email: String,
    /// Demo password, hashed at startup when no precomputed hash is given.
    #[serde(default = "default_password")]
    pub password: String,
    /// Argon2 PHC string. Takes precedence over `password` when non-empty.
    #[serde(default)]
    pub password_hash: String,
    /// Signing secret for session cookies. Rotating it invalidates every
    /// outstanding session.
    pub session_secret: String,
}

impl AuthConfig {
    /// Build the immutable credential used for the process lifetime.
    pub fn credential(&self) -> anyhow::Result<Credential> {
        if self.password_hash.is_empty() {
            Credential::from_password(&self.email, &self.password)
        } else {
            Credential::new(&self.email, &self.password_hash)
        }
    }
}

fn default_email() -> String {
    "analyst@example.com".to_string()
}

fn default_password() -> String {
    "ChangeMe!123".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (GATEHOUSE__AUTH__SESSION_SECRET, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Set defaults
        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Try to load config file (optional - ignore if not found)
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (GATEHOUSE__SERVER__PORT, etc.)
        builder = builder.add_source(
            Environment::with_prefix("GATEHOUSE")
                .separator("__")
                .try_parsing(true),
        );

        // Also support legacy environment variables without prefix
        if let Ok(email) = env::var("DEMO_USER") {
            builder = builder.set_override("auth.email", email)?;
        }
        if let Ok(password) = env::var("DEMO_PASS") {
            builder = builder.set_override("auth.password", password)?;
        }
        if let Ok(password_hash) = env::var("DEMO_PASS_HASH") {
            builder = builder.set_override("auth.password_hash", password_hash)?;
        }
        if let Ok(session_secret) = env::var("SESSION_SECRET") {
            builder = builder.set_override("auth.session_secret", session_secret)?;
        }
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.auth.session_secret.len() < 32 {
            return Err("Session secret must be at least 32 characters long".to_string());
        }
        if self.auth.email.is_empty() {
            return Err("Auth email must not be empty".to_string());
        }
        if self.auth.password.is_empty() && self.auth.password_hash.is_empty() {
            return Err("Either auth password or password_hash must be set".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        Ok(())
    }
}

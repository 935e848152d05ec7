pub mod assets;
pub mod auth;
pub mod config;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod server;
pub mod template;

pub use config::Config;
pub use routes::AppState;

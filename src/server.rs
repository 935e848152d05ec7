use std::sync::Arc;

use anyhow::Result;
use gatehouse_session::{Gatekeeper, TracingAuditSink};
use tower_http::trace::TraceLayer;

use crate::routes::{self, AppState};

/// Start the web server
pub async fn serve(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting gatehouse server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    // The credential and signing secret are read-only after this point;
    // request handling shares them without locking.
    let credential = config.auth.credential()?;
    let gatekeeper = Gatekeeper::new(
        credential,
        config.auth.session_secret.to_owned(),
        Arc::new(TracingAuditSink),
    );

    tracing::info!(identity = gatekeeper.identity(), "Credential loaded");

    let app = routes::router(AppState { gatekeeper }).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

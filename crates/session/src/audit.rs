use time::OffsetDateTime;

/// Authentication-relevant occurrences, append-only, never read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum AuditKind {
    LoginSuccess,
    LoginFailed,
    Logout,
}

/// One audit record. `identity` is the attempted email for failed logins,
/// which deliberately leaks attempts into the logs (and only the logs).
#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub kind: AuditKind,
    pub identity: String,
    pub client_addr: Option<String>,
    pub user_agent: Option<String>,
    pub timestamp: OffsetDateTime,
}

impl AuditEvent {
    pub fn now(kind: AuditKind, identity: impl Into<String>) -> Self {
        Self {
            kind,
            identity: identity.into(),
            client_addr: None,
            user_agent: None,
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    pub fn client_addr(mut self, addr: Option<String>) -> Self {
        self.client_addr = addr;
        self
    }

    pub fn user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Injected log sink. Production uses [`TracingAuditSink`]; tests swap in a
/// recording double.
pub trait AuditSink: Send + Sync {
    fn record(&self, event: AuditEvent);
}

/// Forwards audit events to the tracing subscriber as structured fields.
#[derive(Debug, Default, Clone)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: AuditEvent) {
        let kind = event.kind.to_string();
        let ip = event.client_addr.as_deref().unwrap_or("-");
        let ua = event.user_agent.as_deref().unwrap_or("-");

        match event.kind {
            AuditKind::LoginFailed => {
                tracing::warn!(event = %kind, user = %event.identity, ip = %ip, "login failed");
            }
            AuditKind::LoginSuccess => {
                tracing::info!(event = %kind, user = %event.identity, ip = %ip, ua = %ua, "login succeeded");
            }
            AuditKind::Logout => {
                tracing::info!(event = %kind, user = %event.identity, "logged out");
            }
        }
    }
}

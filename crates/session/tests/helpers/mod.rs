#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use gatehouse_session::{AuditEvent, AuditSink, Credential, Gatekeeper, LoginInput};

pub const EMAIL: &str = "analyst@example.com";
pub const PASSWORD: &str = "ChangeMe!123";
pub const SECRET: &str = "test-secret-key-that-is-32-bytes!";

/// Audit sink double that keeps every recorded event for assertions.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Mutex<Vec<AuditEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl AuditSink for RecordingSink {
    fn record(&self, event: AuditEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn gatekeeper() -> (Gatekeeper, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let credential = Credential::from_password(EMAIL, PASSWORD).unwrap();

    (Gatekeeper::new(credential, SECRET, sink.clone()), sink)
}

pub fn login(email: &str, password: &str) -> LoginInput {
    LoginInput {
        email: email.to_owned(),
        password: password.to_owned(),
        client_addr: Some("203.0.113.9".to_owned()),
        user_agent: Some("session-tests".to_owned()),
    }
}

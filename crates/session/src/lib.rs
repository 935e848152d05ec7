//! Session gatekeeper core: single-credential authentication, signed
//! session tokens and audit events.
//!
//! The web layer owns cookies and redirects; this crate only decides
//! whether a login attempt or a presented token is valid.

pub mod audit;
pub mod credential;
pub mod error;
pub mod token;

mod gatekeeper;

pub use audit::{AuditEvent, AuditKind, AuditSink, TracingAuditSink};
pub use credential::{Credential, hash_password};
pub use error::{AuthError, SessionError};
pub use gatekeeper::{Gatekeeper, LoginInput, Session};

//! Session state.
//!
//! # Responsibilities
//! - Expose the authentication flag the route tree is gated on
//! - Log operators in and out of the console shell
//!
//! # Design Decisions
//! - The routing core only reads [`SessionState`]; it never changes it
//! - No intermediate "checking" state: a session is in or out

pub mod auth;

use serde::{Deserialize, Serialize};

pub use auth::ApiKeySession;

/// Snapshot of the authentication state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub is_auth: bool,
}

impl SessionState {
    pub const AUTHENTICATED: SessionState = SessionState { is_auth: true };
    pub const ANONYMOUS: SessionState = SessionState { is_auth: false };
}

/// Source of the current session.
pub trait SessionSource: Send + Sync {
    fn session(&self) -> SessionState;
}

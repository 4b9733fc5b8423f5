//! API-key login for the console shell.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::SessionConfig;
use crate::session::{SessionSource, SessionState};

/// Session toggled by presenting the configured API key.
#[derive(Debug)]
pub struct ApiKeySession {
    api_key: String,
    authenticated: AtomicBool,
}

impl ApiKeySession {
    pub fn new(api_key: impl Into<String>, authenticated: bool) -> Self {
        Self {
            api_key: api_key.into(),
            authenticated: AtomicBool::new(authenticated),
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.api_key.clone(), config.start_authenticated)
    }

    /// Authenticate with `key`. Returns false and leaves the session unchanged on mismatch.
    pub fn login(&self, key: &str) -> bool {
        if key != self.api_key {
            tracing::warn!("Login rejected: API key mismatch");
            return false;
        }
        let was = self.authenticated.swap(true, Ordering::SeqCst);
        if !was {
            tracing::info!("Session authenticated");
        }
        true
    }

    pub fn logout(&self) {
        if self.authenticated.swap(false, Ordering::SeqCst) {
            tracing::info!("Session ended");
        }
    }
}

impl SessionSource for ApiKeySession {
    fn session(&self) -> SessionState {
        SessionState {
            is_auth: self.authenticated.load(Ordering::SeqCst),
        }
    }
}

//! # Session Module
//!
//! Tracks the currently authenticated user. The session holds a username
//! handle resolved through the UserDirectory; core operations never read it
//! implicitly - they take the user's ledger as an explicit argument.

use serde::{Deserialize, Serialize};

/// At most one authenticated user at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    current: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Replace the authenticated user.
    pub fn login(&mut self, username: String) {
        self.current = Some(username);
    }

    /// Clear the authenticated user.
    pub fn logout(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

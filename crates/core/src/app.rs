//! # App Module
//!
//! AppState bundles the user directory, the session, and the id allocator
//! into one explicit value constructed in `main` and threaded by `&mut`
//! through every shell operation. There is no global mutable state.

use crate::directory::{User, UserDirectory};
use crate::error::{LedgerError, LedgerResult};
use crate::id::IdAllocator;
use crate::ledger::AccountLedger;
use crate::session::Session;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Whole-process application state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub directory: UserDirectory,
    pub session: Session,
    pub ids: IdAllocator,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            directory: UserDirectory::new(),
            session: Session::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Register a new user. Does not log them in.
    pub fn register(&mut self, username: &str, password: &str) -> LedgerResult<()> {
        self.directory.register(username, password)?;
        Ok(())
    }

    /// Authenticate and open a session for the matching user.
    pub fn login(&mut self, username: &str, password: &str) -> LedgerResult<()> {
        let user = self.directory.authenticate(username, password)?;
        let username = user.username.clone();
        info!(%username, "login");
        self.session.login(username);
        Ok(())
    }

    /// Close the session, if any.
    pub fn logout(&mut self) {
        if let Some(username) = self.session.current() {
            info!(username, "logout");
        }
        self.session.logout();
    }

    /// The logged-in user, if a session is active.
    pub fn current_user(&self) -> Option<&User> {
        self.directory.find_user(self.session.current()?)
    }

    /// The logged-in user's ledger together with the id allocator, for
    /// operations that create accounts or transactions.
    ///
    /// Fails with `UserNotFound` if the session references a username the
    /// directory no longer resolves (cannot happen while users are never
    /// deleted, but the case stays typed rather than panicking).
    pub fn session_ledger_mut(
        &mut self,
    ) -> LedgerResult<(&mut AccountLedger, &mut IdAllocator)> {
        let username = self
            .session
            .current()
            .ok_or(LedgerError::InvalidCredentials)?;
        let user = self
            .directory
            .find_user_mut(username)
            .ok_or_else(|| LedgerError::UserNotFound(username.to_string()))?;
        Ok((&mut user.ledger, &mut self.ids))
    }
}

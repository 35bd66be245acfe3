//! # Directory Module
//!
//! User registry: registration and plaintext credential authentication.
//! Real credential security is explicitly out of scope.

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::AccountLedger;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A registered user and their accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique within the directory
    pub username: String,
    /// Opaque credential, compared verbatim
    pub password: String,
    /// The user's accounts
    pub ledger: AccountLedger,
    /// Registration time
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            ledger: AccountLedger::new(),
            created_at: Utc::now(),
        }
    }
}

/// Registry of users. Users are never deleted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Register a new user with an empty ledger.
    ///
    /// Duplicate usernames are rejected. The system this replaces accepted
    /// them and let authentication match the first registrant; rejecting at
    /// registration removes that ambiguity.
    pub fn register(&mut self, username: &str, password: &str) -> LedgerResult<&mut User> {
        if self.users.iter().any(|u| u.username == username) {
            return Err(LedgerError::DuplicateUser(username.to_string()));
        }
        info!(username, "user registered");
        self.users.push(User::new(username, password));
        // push just happened, the list is non-empty
        Ok(self.users.last_mut().unwrap())
    }

    /// Exact string match on both fields; first match wins.
    pub fn authenticate(&self, username: &str, password: &str) -> LedgerResult<&User> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .ok_or(LedgerError::InvalidCredentials)
    }

    pub fn find_user(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn find_user_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.username == username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_authenticate() {
        let mut directory = UserDirectory::new();
        assert!(directory.is_empty());

        directory.register("alice", "s3cret").unwrap();
        assert!(!directory.is_empty());
        assert_eq!(directory.len(), 1);

        let user = directory.authenticate("alice", "s3cret").unwrap();
        assert_eq!(user.username, "alice");
        assert!(user.ledger.is_empty());
    }

    #[test]
    fn test_wrong_password_rejected() {
        let mut directory = UserDirectory::new();
        directory.register("alice", "s3cret").unwrap();

        let err = directory.authenticate("alice", "guess").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidCredentials));
    }

    #[test]
    fn test_unknown_user_rejected() {
        let directory = UserDirectory::new();
        assert!(matches!(
            directory.authenticate("nobody", "x").unwrap_err(),
            LedgerError::InvalidCredentials
        ));
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let mut directory = UserDirectory::new();
        directory.register("alice", "one").unwrap();

        let err = directory.register("alice", "two").unwrap_err();
        assert!(matches!(err, LedgerError::DuplicateUser(name) if name == "alice"));
        assert_eq!(directory.len(), 1);

        // The original credentials still work.
        assert!(directory.authenticate("alice", "one").is_ok());
    }

    #[test]
    fn test_find_user() {
        let mut directory = UserDirectory::new();
        directory.register("alice", "pw").unwrap();

        assert!(directory.find_user("alice").is_some());
        assert!(directory.find_user("bob").is_none());
    }
}

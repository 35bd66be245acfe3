//! # Id Module
//!
//! Monotonic identifier allocation for accounts and transactions.
//!
//! The allocator is an explicit value threaded through operations (it lives
//! in [`crate::AppState`]) rather than a pair of static counters, so tests
//! can construct or pre-seed it deterministically.

use serde::{Deserialize, Serialize};

/// First account number ever issued.
pub const FIRST_ACCOUNT_NUMBER: u32 = 1000;

/// First transaction id ever issued.
pub const FIRST_TRANSACTION_ID: u64 = 1;

/// Issues unique, monotonically increasing identifiers.
///
/// Two independent counters: account numbers start at 1000, transaction ids
/// at 1. Both are process-wide - every user's accounts and every account's
/// transactions draw from the same allocator. No reuse, no wraparound
/// handling (capacity far exceeds practical usage).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdAllocator {
    next_account_number: u32,
    next_transaction_id: u64,
}

impl IdAllocator {
    /// Allocator in its initial state.
    pub fn new() -> Self {
        Self {
            next_account_number: FIRST_ACCOUNT_NUMBER,
            next_transaction_id: FIRST_TRANSACTION_ID,
        }
    }

    /// Allocator starting from the given counters. Test hook.
    pub fn with_seeds(next_account_number: u32, next_transaction_id: u64) -> Self {
        Self {
            next_account_number,
            next_transaction_id,
        }
    }

    /// Returns the current account number and advances the counter.
    pub fn next_account_number(&mut self) -> u32 {
        let n = self.next_account_number;
        self.next_account_number += 1;
        n
    }

    /// Returns the current transaction id and advances the counter.
    pub fn next_transaction_id(&mut self) -> u64 {
        let id = self.next_transaction_id;
        self.next_transaction_id += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

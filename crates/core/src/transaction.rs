//! # Transaction Module
//!
//! Defines TransactionKind, Transaction, and the append-only TransactionLog
//! owned by each Account.

use crate::id::IdAllocator;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of balance-affecting event.
///
/// The stored amount is always an unsigned magnitude; the kind decides the
/// sign applied to the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// User-initiated credit
    Deposit,
    /// User-initiated debit
    Withdrawal,
    /// System-generated monthly interest credit
    Interest,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Interest => "interest",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "deposit" => Some(TransactionKind::Deposit),
            "withdrawal" => Some(TransactionKind::Withdrawal),
            "interest" => Some(TransactionKind::Interest),
            _ => None,
        }
    }

    /// Apply this kind's sign to a magnitude.
    ///
    /// Deposits and interest credits count positive, withdrawals negative.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            TransactionKind::Deposit | TransactionKind::Interest => amount,
            TransactionKind::Withdrawal => -amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable record of a single balance-affecting event.
///
/// Appended to its account's log at creation and never removed or modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Process-wide monotonic id (starts at 1)
    pub id: u64,
    /// Creation time
    pub timestamp: DateTime<Utc>,
    /// Event kind
    pub kind: TransactionKind,
    /// Unsigned magnitude; sign is implied by `kind`
    pub amount: Decimal,
}

impl Transaction {
    /// The amount with the kind's sign applied.
    pub fn signed_amount(&self) -> Decimal {
        self.kind.signed(self.amount)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {}", self.id, self.kind, self.amount)
    }
}

/// Append-only ordered record of one account's monetary events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
}

impl TransactionLog {
    /// Empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a new event: allocates a transaction id, stamps the current
    /// time, appends.
    ///
    /// No amount validation happens here - that is the owning Account's
    /// responsibility.
    pub fn record(
        &mut self,
        ids: &mut IdAllocator,
        kind: TransactionKind,
        amount: Decimal,
    ) -> &Transaction {
        let transaction = Transaction {
            id: ids.next_transaction_id(),
            timestamp: Utc::now(),
            kind,
            amount,
        };
        self.entries.push(transaction);
        // push just happened, the log is non-empty
        self.entries.last().unwrap()
    }

    /// Read-only view of all entries, oldest first.
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of kind-signed amounts over the whole log.
    ///
    /// `balance == initial_deposit + signed_total()` is the ledger's core
    /// invariant.
    pub fn signed_total(&self) -> Decimal {
        self.entries.iter().map(Transaction::signed_amount).sum()
    }
}

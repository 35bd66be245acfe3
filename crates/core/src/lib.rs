//! # Minibank Core
//!
//! Domain layer for a single-process personal banking ledger: users own
//! accounts, accounts own an append-only transaction log, and savings
//! accounts accrue a fixed monthly interest.
//!
//! All state is volatile and exclusively owned; the interactive shell in
//! `minibank-cli` drives these types sequentially with already-parsed,
//! typed arguments.

pub mod account;
pub mod app;
pub mod directory;
pub mod error;
pub mod id;
pub mod interest;
pub mod ledger;
pub mod session;
pub mod transaction;

pub use account::{Account, AccountType};
pub use app::AppState;
pub use directory::{User, UserDirectory};
pub use error::{LedgerError, LedgerResult};
pub use id::IdAllocator;
pub use interest::{InterestOutcome, InterestPolicy, MonthStamp};
pub use ledger::AccountLedger;
pub use session::Session;
pub use transaction::{Transaction, TransactionKind, TransactionLog};

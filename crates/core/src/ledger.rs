//! # Ledger Module
//!
//! AccountLedger - one user's collection of accounts, looked up by account
//! number.

use crate::account::{Account, AccountType};
use crate::error::{LedgerError, LedgerResult};
use crate::id::IdAllocator;
use crate::interest::InterestOutcome;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user's accounts. Creation and lookup only - accounts are never deleted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountLedger {
    accounts: Vec<Account>,
}

impl AccountLedger {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    /// Create and store a new account, returning its account number.
    pub fn open_account(
        &mut self,
        ids: &mut IdAllocator,
        holder: &str,
        account_type: AccountType,
        initial_deposit: Decimal,
    ) -> u32 {
        let account = Account::open(ids, holder, account_type, initial_deposit);
        let number = account.number();
        self.accounts.push(account);
        number
    }

    /// Look up an account by number.
    pub fn find(&self, number: u32) -> LedgerResult<&Account> {
        self.accounts
            .iter()
            .find(|a| a.number() == number)
            .ok_or(LedgerError::AccountNotFound(number))
    }

    /// Mutable lookup by number.
    pub fn find_mut(&mut self, number: u32) -> LedgerResult<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.number() == number)
            .ok_or(LedgerError::AccountNotFound(number))
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Run the monthly accrual over every account in the ledger.
    ///
    /// Returns each account number paired with its outcome so the shell can
    /// report per-account results. Non-savings accounts show up as
    /// `NotApplicable`.
    pub fn credit_interest_all(
        &mut self,
        ids: &mut IdAllocator,
        today: NaiveDate,
    ) -> Vec<(u32, InterestOutcome)> {
        self.accounts
            .iter_mut()
            .map(|account| (account.number(), account.credit_interest(ids, today)))
            .collect()
    }
}

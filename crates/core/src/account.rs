//! # Account Module
//!
//! Defines AccountType and Account. An Account owns its TransactionLog and
//! delegates accrual decisions to its InterestPolicy.

use crate::error::{LedgerError, LedgerResult};
use crate::id::IdAllocator;
use crate::interest::{InterestOutcome, InterestPolicy};
use crate::transaction::{Transaction, TransactionKind, TransactionLog};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Kind of account.
///
/// Only `savings` and `checking` are recognized; any other label is kept
/// verbatim as `Other` and never accrues interest. The original system
/// accepted arbitrary labels the same way, so the behavior is preserved but
/// made visible in the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Savings,
    Checking,
    Other(String),
}

impl AccountType {
    /// Parse a user-supplied label, case-insensitively.
    ///
    /// Unrecognized labels are accepted as given rather than rejected.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "savings" => AccountType::Savings,
            "checking" => AccountType::Checking,
            _ => AccountType::Other(label.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AccountType::Savings => "savings",
            AccountType::Checking => "checking",
            AccountType::Other(label) => label,
        }
    }

    /// Only savings accounts accrue monthly interest.
    pub fn accrues_interest(&self) -> bool {
        matches!(self, AccountType::Savings)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single bank account.
///
/// Invariant: `balance == initial_deposit + transactions.signed_total()`
/// immediately before and after every operation. A failed withdrawal leaves
/// both the balance and the log untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique process-wide account number, immutable after creation
    number: u32,
    /// Account holder's name
    pub holder: String,
    /// Account kind
    pub account_type: AccountType,
    balance: Decimal,
    initial_deposit: Decimal,
    transactions: TransactionLog,
    interest: InterestPolicy,
    /// Creation time
    pub opened_at: DateTime<Utc>,
}

impl Account {
    /// Open an account: fresh number, balance = initial deposit, empty log.
    pub fn open(
        ids: &mut IdAllocator,
        holder: &str,
        account_type: AccountType,
        initial_deposit: Decimal,
    ) -> Self {
        let number = ids.next_account_number();
        debug!(number, holder, %account_type, %initial_deposit, "account opened");
        Self {
            number,
            holder: holder.to_string(),
            account_type,
            balance: initial_deposit,
            initial_deposit,
            transactions: TransactionLog::new(),
            interest: InterestPolicy::monthly(),
            opened_at: Utc::now(),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// The deposit the account was opened with.
    pub fn initial_deposit(&self) -> Decimal {
        self.initial_deposit
    }

    /// Read-only statement view, oldest entry first. Display formatting is
    /// entirely the shell's concern.
    pub fn statement(&self) -> &[Transaction] {
        self.transactions.entries()
    }

    /// The account's interest policy state.
    pub fn interest(&self) -> &InterestPolicy {
        &self.interest
    }

    /// Credit funds.
    ///
    /// Rejects zero and negative amounts with `InvalidAmount`.
    pub fn deposit(&mut self, ids: &mut IdAllocator, amount: Decimal) -> LedgerResult<()> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }
        self.transactions
            .record(ids, TransactionKind::Deposit, amount);
        self.balance += amount;
        debug!(number = self.number, %amount, balance = %self.balance, "deposit");
        Ok(())
    }

    /// Debit funds.
    ///
    /// Rejects zero and negative amounts with `InvalidAmount`, and amounts
    /// above the current balance with `InsufficientFunds`. On failure
    /// neither the balance nor the log is modified.
    pub fn withdraw(&mut self, ids: &mut IdAllocator, amount: Decimal) -> LedgerResult<()> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.transactions
            .record(ids, TransactionKind::Withdrawal, amount);
        self.balance -= amount;
        debug!(number = self.number, %amount, balance = %self.balance, "withdrawal");
        Ok(())
    }

    /// Apply the monthly interest policy as of `today`.
    ///
    /// Savings accounts get 2% of the pre-credit balance at most once per
    /// calendar month; repeat calls in the same month are idempotent no-ops.
    /// Any other account type reports `NotApplicable` and never mutates.
    pub fn credit_interest(&mut self, ids: &mut IdAllocator, today: NaiveDate) -> InterestOutcome {
        if !self.account_type.accrues_interest() {
            return InterestOutcome::NotApplicable;
        }
        if !self.interest.due(today) {
            return InterestOutcome::AlreadyCredited;
        }

        let interest = self.interest.compute(self.balance);
        self.transactions
            .record(ids, TransactionKind::Interest, interest);
        self.balance += interest;
        self.interest.mark_credited(today);
        debug!(number = self.number, %interest, balance = %self.balance, "interest credited");
        InterestOutcome::Credited(interest)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} ({}, {}, balance: {})",
            self.number, self.holder, self.account_type, self.balance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn savings(ids: &mut IdAllocator, deposit: Decimal) -> Account {
        Account::open(ids, "Alice", AccountType::Savings, deposit)
    }

    #[test]
    fn test_account_type_from_label() {
        assert_eq!(AccountType::from_label("savings"), AccountType::Savings);
        assert_eq!(AccountType::from_label("SAVINGS"), AccountType::Savings);
        assert_eq!(AccountType::from_label("Checking"), AccountType::Checking);
        assert_eq!(
            AccountType::from_label("gold"),
            AccountType::Other("gold".to_string())
        );
    }

    #[test]
    fn test_open_account() {
        let mut ids = IdAllocator::new();
        let account = savings(&mut ids, dec!(500));

        assert_eq!(account.number(), 1000);
        assert_eq!(account.balance(), dec!(500));
        assert!(account.statement().is_empty());
        assert!(account.interest().last_credited().is_none());
    }

    #[test]
    fn test_balance_matches_signed_log_total() {
        let mut ids = IdAllocator::new();
        let mut account = savings(&mut ids, dec!(100));

        account.deposit(&mut ids, dec!(50)).unwrap();
        account.withdraw(&mut ids, dec!(30)).unwrap();
        account.deposit(&mut ids, dec!(0.75)).unwrap();
        account.credit_interest(&mut ids, date(2026, 1, 15));

        let signed_total: Decimal = account
            .statement()
            .iter()
            .map(Transaction::signed_amount)
            .sum();
        assert_eq!(account.balance(), account.initial_deposit() + signed_total);
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut ids = IdAllocator::new();
        let mut account = savings(&mut ids, dec!(100));

        assert!(matches!(
            account.deposit(&mut ids, dec!(0)),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            account.deposit(&mut ids, dec!(-10)),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert_eq!(account.balance(), dec!(100));
        assert!(account.statement().is_empty());
    }

    #[test]
    fn test_withdraw_rejects_non_positive() {
        let mut ids = IdAllocator::new();
        let mut account = savings(&mut ids, dec!(100));

        assert!(matches!(
            account.withdraw(&mut ids, dec!(0)),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn test_failed_withdrawal_leaves_no_trace() {
        let mut ids = IdAllocator::new();
        let mut account = Account::open(&mut ids, "Bob", AccountType::Checking, dec!(100));

        account.deposit(&mut ids, dec!(50)).unwrap();
        assert_eq!(account.balance(), dec!(150));

        let err = account.withdraw(&mut ids, dec!(200)).unwrap_err();
        assert!(err.is_insufficient_funds());
        assert_eq!(account.balance(), dec!(150));
        assert_eq!(account.statement().len(), 1);
        assert_eq!(account.statement()[0].kind, TransactionKind::Deposit);
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut ids = IdAllocator::new();
        let mut account = savings(&mut ids, dec!(100));

        account.withdraw(&mut ids, dec!(100)).unwrap();
        assert_eq!(account.balance(), dec!(0));
    }

    #[test]
    fn test_interest_credited_once_per_month() {
        let mut ids = IdAllocator::new();
        let mut account = savings(&mut ids, dec!(1000.00));

        let outcome = account.credit_interest(&mut ids, date(2026, 1, 10));
        assert_eq!(outcome, InterestOutcome::Credited(dec!(20.00)));
        assert_eq!(account.balance(), dec!(1020.00));
        assert_eq!(account.statement().len(), 1);
        assert_eq!(account.statement()[0].kind, TransactionKind::Interest);
        assert_eq!(account.statement()[0].amount, dec!(20.00));

        // Same January: no mutation.
        let outcome = account.credit_interest(&mut ids, date(2026, 1, 31));
        assert_eq!(outcome, InterestOutcome::AlreadyCredited);
        assert_eq!(account.balance(), dec!(1020.00));
        assert_eq!(account.statement().len(), 1);
    }

    #[test]
    fn test_interest_due_again_next_month() {
        let mut ids = IdAllocator::new();
        let mut account = savings(&mut ids, dec!(1000.00));

        account.credit_interest(&mut ids, date(2026, 1, 10));
        let outcome = account.credit_interest(&mut ids, date(2026, 2, 1));

        // 2% of 1020.00
        assert_eq!(outcome, InterestOutcome::Credited(dec!(20.40)));
        assert_eq!(account.balance(), dec!(1040.40));
    }

    #[test]
    fn test_interest_not_applicable_to_checking() {
        let mut ids = IdAllocator::new();
        let mut account = Account::open(&mut ids, "Bob", AccountType::Checking, dec!(1000));

        for _ in 0..3 {
            let outcome = account.credit_interest(&mut ids, date(2026, 1, 10));
            assert_eq!(outcome, InterestOutcome::NotApplicable);
        }
        assert_eq!(account.balance(), dec!(1000));
        assert!(account.statement().is_empty());
    }

    #[test]
    fn test_interest_not_applicable_to_unrecognized_type() {
        let mut ids = IdAllocator::new();
        let mut account =
            Account::open(&mut ids, "Bob", AccountType::from_label("gold"), dec!(1000));

        let outcome = account.credit_interest(&mut ids, date(2026, 6, 1));
        assert_eq!(outcome, InterestOutcome::NotApplicable);
        assert_eq!(account.account_type.as_str(), "gold");
    }

    #[test]
    fn test_interest_same_month_of_later_year_skipped() {
        // Month-only comparison: January 2027 looks like January 2026.
        let mut ids = IdAllocator::new();
        let mut account = savings(&mut ids, dec!(1000.00));

        account.credit_interest(&mut ids, date(2026, 1, 10));
        let outcome = account.credit_interest(&mut ids, date(2027, 1, 10));
        assert_eq!(outcome, InterestOutcome::AlreadyCredited);
    }
}

//! # Interest Module
//!
//! Per-account monthly interest policy for savings accounts: a fixed 2% of
//! the current balance, credited at most once per calendar month.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The (year, month) an interest credit was last applied.
///
/// A first-class value instead of a nullable date: `Option<MonthStamp>`
/// makes "never credited" a checked case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthStamp {
    pub year: i32,
    pub month: u32,
}

impl MonthStamp {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Whether this stamp falls in the same month-of-year as `date`.
    ///
    /// Deliberately ignores the year: an account idle for 12+ months skips
    /// a credit when revisited in the same calendar month of a later year.
    /// Known quirk, kept as documented behavior.
    pub fn same_month_of_year(&self, date: NaiveDate) -> bool {
        self.month == date.month()
    }
}

impl fmt::Display for MonthStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Outcome of an interest accrual attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestOutcome {
    /// Interest was computed and credited; carries the credited amount.
    Credited(Decimal),
    /// Already credited this calendar month. Idempotent no-op, not an error.
    AlreadyCredited,
    /// The account type does not accrue interest. Expected no-op.
    NotApplicable,
}

/// Stateful per-account accrual policy.
///
/// Interest is simple, not compounding within a single credit event: the
/// amount is computed on the balance before the credit is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestPolicy {
    rate: Decimal,
    last_credited: Option<MonthStamp>,
}

impl InterestPolicy {
    /// The standard policy: 2% monthly, never credited yet.
    pub fn monthly() -> Self {
        Self {
            // 2% flat monthly rate
            rate: Decimal::new(2, 2),
            last_credited: None,
        }
    }

    /// Whether a credit is due on `today`.
    ///
    /// Due when never credited, or when the last credit's month-of-year
    /// differs from `today`'s (see [`MonthStamp::same_month_of_year`]).
    pub fn due(&self, today: NaiveDate) -> bool {
        match self.last_credited {
            None => true,
            Some(stamp) => !stamp.same_month_of_year(today),
        }
    }

    /// Interest amount for the given balance.
    pub fn compute(&self, balance: Decimal) -> Decimal {
        balance * self.rate
    }

    /// Record that a credit was applied on `today`.
    pub fn mark_credited(&mut self, today: NaiveDate) {
        self.last_credited = Some(MonthStamp::from_date(today));
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn last_credited(&self) -> Option<MonthStamp> {
        self.last_credited
    }
}

impl Default for InterestPolicy {
    fn default() -> Self {
        Self::monthly()
    }
}

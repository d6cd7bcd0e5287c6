//! Financial metrics over a transaction ledger
//!
//! The analyzer borrows an ordered slice of transactions and derives
//! every metric on demand. Nothing is cached, so each call is a pure
//! function of the slice it was built over.

use crate::error::{FiscalError, FiscalResult};
use crate::models::{HealthStatus, Money, Transaction};

/// Fixed multiplier converting income from source into reporting currency
pub const DEFAULT_CONVERSION_RATE: i64 = 20;

/// Derived-metric calculator over a transaction slice
pub struct Analyzer<'a> {
    transactions: &'a [Transaction],
    conversion_rate: i64,
}

impl<'a> Analyzer<'a> {
    /// Create an analyzer with the default conversion rate
    pub fn new(transactions: &'a [Transaction]) -> Self {
        Self {
            transactions,
            conversion_rate: DEFAULT_CONVERSION_RATE,
        }
    }

    /// Override the income conversion rate
    pub fn with_conversion_rate(mut self, rate: i64) -> Self {
        self.conversion_rate = rate;
        self
    }

    /// Sum of income amounts converted into reporting currency
    pub fn total_revenue(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount * self.conversion_rate)
            .sum()
    }

    /// Sum of expense amounts
    pub fn total_expenses(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum()
    }

    /// Revenue minus expenses
    pub fn profit(&self) -> Money {
        self.total_revenue() - self.total_expenses()
    }

    /// Profit as a fraction of revenue
    ///
    /// Fails when no revenue was recorded.
    pub fn profit_margin(&self) -> FiscalResult<f64> {
        let revenue = self.total_revenue();
        if revenue.is_zero() {
            return Err(FiscalError::ZeroRevenue);
        }
        Ok(self.profit().cents() as f64 / revenue.cents() as f64)
    }

    /// Profit spread evenly across every ledger entry
    ///
    /// Truncates toward zero at cent resolution. Fails when the ledger
    /// is empty.
    pub fn average_transaction_amount(&self) -> FiscalResult<Money> {
        if self.transactions.is_empty() {
            return Err(FiscalError::EmptyLedger);
        }
        Ok(Money::from_cents(
            self.profit().cents() / self.transactions.len() as i64,
        ))
    }

    /// Three-tier classification of profit
    pub fn financial_health(&self) -> HealthStatus {
        HealthStatus::classify(self.profit())
    }

    /// Number of ledger entries
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

//! Transaction model
//!
//! An immutable ledger entry: one dated, categorized monetary amount.
//! Entries are created either directly or from a `date,category,amount`
//! text line.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;
use crate::error::{FiscalError, FiscalResult};

/// Default strftime pattern for ledger dates
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Ledger label; only Income and Expense enter the sums
    pub category: Category,

    /// Amount in source currency units, never negative
    pub amount: Money,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(date: NaiveDate, category: Category, amount: Money) -> Self {
        Self {
            date,
            category,
            amount,
        }
    }

    /// Parse a `date,category,amount` ledger line
    ///
    /// Extra comma-separated fields after the amount are ignored. Fails
    /// on missing fields, an unparseable date or amount, or a negative
    /// amount.
    pub fn parse_line(line: &str, date_format: &str) -> FiscalResult<Self> {
        let parts: Vec<&str> = line.trim().split(',').collect();
        if parts.len() < 3 {
            return Err(FiscalError::Parse(format!(
                "expected 'date,category,amount', got '{}'",
                line.trim()
            )));
        }
        Self::from_fields(parts[0], parts[1], parts[2], date_format)
    }

    /// Build a transaction from already-separated fields
    pub(crate) fn from_fields(
        date: &str,
        category: &str,
        amount: &str,
        date_format: &str,
    ) -> FiscalResult<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), date_format)
            .map_err(|_| FiscalError::Parse(format!("invalid date '{}'", date.trim())))?;
        let amount = Money::parse(amount).map_err(|e| FiscalError::Parse(e.to_string()))?;
        if amount.is_negative() {
            return Err(FiscalError::Validation(format!(
                "amount must not be negative, got {}",
                amount
            )));
        }
        Ok(Self::new(date, Category::from(category), amount))
    }

    /// Check if this entry counts toward revenue
    pub fn is_income(&self) -> bool {
        self.category.is_income()
    }

    /// Check if this entry counts toward expenses
    pub fn is_expense(&self) -> bool {
        self.category.is_expense()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(date(2024, 1, 1), Category::Income, Money::from_units(1000));
        assert_eq!(txn.date, date(2024, 1, 1));
        assert!(txn.is_income());
        assert!(!txn.is_expense());
        assert_eq!(txn.amount.cents(), 100000);
    }

    #[test]
    fn test_parse_line() {
        let txn = Transaction::parse_line("2024-01-02,Expense,500", DEFAULT_DATE_FORMAT).unwrap();
        assert_eq!(txn.date, date(2024, 1, 2));
        assert_eq!(txn.category, Category::Expense);
        assert_eq!(txn.amount, Money::from_units(500));
    }

    #[test]
    fn test_parse_line_with_decimal_amount() {
        let txn =
            Transaction::parse_line("2024-03-15,Income,19.99", DEFAULT_DATE_FORMAT).unwrap();
        assert_eq!(txn.amount.cents(), 1999);
    }

    #[test]
    fn test_parse_line_trims_whitespace() {
        let txn =
            Transaction::parse_line("  2024-01-02, Expense ,500\n", DEFAULT_DATE_FORMAT).unwrap();
        assert_eq!(txn.category, Category::Expense);
    }

    #[test]
    fn test_parse_line_unknown_category() {
        let txn = Transaction::parse_line("2024-01-02,Transfer,500", DEFAULT_DATE_FORMAT).unwrap();
        assert_eq!(txn.category, Category::Other("Transfer".to_string()));
    }

    #[test]
    fn test_parse_line_ignores_extra_fields() {
        let txn =
            Transaction::parse_line("2024-01-02,Expense,500,memo", DEFAULT_DATE_FORMAT).unwrap();
        assert_eq!(txn.amount, Money::from_units(500));
    }

    #[test]
    fn test_parse_line_missing_fields() {
        let err = Transaction::parse_line("2024-01-02,Expense", DEFAULT_DATE_FORMAT).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_parse_line_bad_date() {
        let err = Transaction::parse_line("yesterday,Expense,500", DEFAULT_DATE_FORMAT).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_parse_line_bad_amount() {
        let err = Transaction::parse_line("2024-01-02,Expense,lots", DEFAULT_DATE_FORMAT).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_parse_line_rejects_negative_amount() {
        let err =
            Transaction::parse_line("2024-01-02,Expense,-500", DEFAULT_DATE_FORMAT).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_parse_line_custom_date_format() {
        let txn = Transaction::parse_line("01/02/2024,Income,75", "%m/%d/%Y").unwrap();
        assert_eq!(txn.date, date(2024, 1, 2));
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(date(2024, 1, 1), Category::Income, Money::from_units(1000));
        assert_eq!(format!("{}", txn), "2024-01-01 Income $1000.00");
    }

    #[test]
    fn test_serialization_round_trip() {
        let txn = Transaction::new(date(2024, 1, 4), Category::Expense, Money::from_cents(30050));
        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}

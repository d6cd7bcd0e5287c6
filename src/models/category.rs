//! Transaction category labels
//!
//! Ledger lines carry a free-form label; only "Income" and "Expense"
//! participate in the aggregate sums. Any other label is preserved as-is
//! and excluded from both revenue and expenses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a ledger entry
///
/// Matching against the ledger labels is exact: "income" or "INCOME" are
/// not income, they land in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Counts toward revenue
    Income,
    /// Counts toward expenses
    Expense,
    /// Unrecognized label, excluded from both sums
    Other(String),
}

impl Category {
    /// Check if this is the income category
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    /// Check if this is the expense category
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }

    /// The label as it appears in the ledger
    pub fn label(&self) -> &str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Other(label) => label,
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        match label.trim() {
            "Income" => Self::Income,
            "Expense" => Self::Expense,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

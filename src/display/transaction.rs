//! Transaction display formatting
//!
//! Formats parsed ledger entries as a register for terminal output.

use crate::display::report::truncate;
use crate::models::Transaction;

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "{} {:<14} {:>12}",
        txn.date.format("%Y-%m-%d"),
        truncate(txn.category.label(), 14),
        txn.amount.to_string()
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10} {:<14} {:>12}\n",
        "Date", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(38));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

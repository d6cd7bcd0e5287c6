//! Financial summary report
//!
//! Bundles every derived metric for a ledger into one report value with
//! terminal, CSV, and JSON renderings.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use crate::display::report::format_percentage;
use crate::error::{FiscalError, FiscalResult};
use crate::models::{HealthStatus, Money, Transaction};
use crate::services::Analyzer;

/// Snapshot of every derived metric for a ledger
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    /// Earliest transaction date in the ledger
    pub start_date: NaiveDate,
    /// Latest transaction date in the ledger
    pub end_date: NaiveDate,
    /// Number of ledger entries
    pub transaction_count: usize,
    /// Income total after currency conversion
    pub total_revenue: Money,
    /// Expense total
    pub total_expenses: Money,
    /// Revenue minus expenses
    pub profit: Money,
    /// Profit as a fraction of revenue
    pub profit_margin: f64,
    /// Profit spread across every entry
    pub average_transaction_amount: Money,
    /// Three-tier health classification
    pub financial_health: HealthStatus,
}

impl SummaryReport {
    /// Generate a summary for a ledger
    ///
    /// Fails for an empty ledger or one with no revenue, where the
    /// average and margin are undefined.
    pub fn generate(transactions: &[Transaction], conversion_rate: i64) -> FiscalResult<Self> {
        let analyzer = Analyzer::new(transactions).with_conversion_rate(conversion_rate);

        let average_transaction_amount = analyzer.average_transaction_amount()?;
        let profit_margin = analyzer.profit_margin()?;

        let start_date = transactions.iter().map(|t| t.date).min();
        let end_date = transactions.iter().map(|t| t.date).max();
        let (start_date, end_date) = match (start_date, end_date) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(FiscalError::EmptyLedger),
        };

        Ok(Self {
            start_date,
            end_date,
            transaction_count: analyzer.transaction_count(),
            total_revenue: analyzer.total_revenue(),
            total_expenses: analyzer.total_expenses(),
            profit: analyzer.profit(),
            profit_margin,
            average_transaction_amount,
            financial_health: analyzer.financial_health(),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Financial Summary: {} to {}\n",
            self.start_date, self.end_date
        ));
        output.push_str(&"=".repeat(46));
        output.push('\n');

        output.push_str(&format!(
            "{:<24} {:>20}\n",
            "Transactions:",
            self.transaction_count.to_string()
        ));
        output.push_str(&format!(
            "{:<24} {:>20}\n",
            "Total revenue:",
            self.total_revenue.to_string()
        ));
        output.push_str(&format!(
            "{:<24} {:>20}\n",
            "Total expenses:",
            self.total_expenses.to_string()
        ));
        output.push_str(&format!(
            "{:<24} {:>20}\n",
            "Profit:",
            self.profit.to_string()
        ));
        output.push_str(&format!(
            "{:<24} {:>20}\n",
            "Profit margin:",
            format_percentage(self.profit_margin * 100.0)
        ));
        output.push_str(&format!(
            "{:<24} {:>20}\n",
            "Average transaction:",
            self.average_transaction_amount.to_string()
        ));

        output.push_str(&"-".repeat(46));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>20}\n",
            "Financial health:",
            self.financial_health.to_string()
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FiscalResult<()> {
        writeln!(
            writer,
            "Start Date,End Date,Transactions,Revenue,Expenses,Profit,Margin,Average,Health"
        )
        .map_err(|e| FiscalError::Export(e.to_string()))?;

        writeln!(
            writer,
            "{},{},{},{:.2},{:.2},{:.2},{:.4},{:.2},{}",
            self.start_date,
            self.end_date,
            self.transaction_count,
            self.total_revenue.cents() as f64 / 100.0,
            self.total_expenses.cents() as f64 / 100.0,
            self.profit.cents() as f64 / 100.0,
            self.profit_margin,
            self.average_transaction_amount.cents() as f64 / 100.0,
            self.financial_health
        )
        .map_err(|e| FiscalError::Export(e.to_string()))?;

        Ok(())
    }

    /// Export the report as pretty-printed JSON
    pub fn export_json<W: Write>(&self, writer: &mut W) -> FiscalResult<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer).map_err(|e| FiscalError::Export(e.to_string()))?;
        Ok(())
    }
}

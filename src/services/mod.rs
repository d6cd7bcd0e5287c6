//! Business logic layer
//!
//! Services operate on ledgers held in memory: the reader turns ledger
//! files into transactions, the analyzer derives metrics from them.

pub mod analyzer;
pub mod import;

pub use analyzer::{Analyzer, DEFAULT_CONVERSION_RATE};
pub use import::{read_ledger, LedgerFormat, LedgerReader};

//! fiscal-cli - financial health summary for transaction ledgers
//!
//! This library provides the core functionality for the fiscal CLI: it
//! reads a CSV ledger of dated, categorized transactions and derives
//! revenue, expenses, profit, margin, the average transaction amount,
//! and a coarse three-tier health classification.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, categories, health)
//! - `services`: Ledger ingestion and the metrics analyzer
//! - `reports`: Summary report generation and export
//! - `display`: Terminal formatting helpers
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fiscal::models::{Category, Money, Transaction};
//! use fiscal::services::Analyzer;
//!
//! let ledger = vec![Transaction::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     Category::Income,
//!     Money::from_units(1000),
//! )];
//!
//! let analyzer = Analyzer::new(&ledger);
//! assert!(analyzer.profit().is_positive());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;

pub use error::FiscalError;

//! Core data models for fiscal-cli
//!
//! This module contains the data structures that represent the ledger
//! domain: monetary amounts, transactions, category labels, and the
//! health classification.

pub mod category;
pub mod health;
pub mod money;
pub mod transaction;

pub use category::Category;
pub use health::{HealthStatus, WARNING_FLOOR};
pub use money::Money;
pub use transaction::{Transaction, DEFAULT_DATE_FORMAT};

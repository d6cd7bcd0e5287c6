//! Financial health classification
//!
//! Profit maps onto three coarse tiers that partition the whole range:
//! non-negative profit is Healthy, a loss down to the warning floor is
//! Warning, and anything deeper is Critical.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Profit floor below which health drops from Warning to Critical
pub const WARNING_FLOOR: Money = Money::from_cents(-100_000);

/// Coarse three-tier classification of profit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Profit is non-negative
    Healthy,
    /// Loss no deeper than the warning floor
    Warning,
    /// Loss deeper than the warning floor
    Critical,
}

impl HealthStatus {
    /// Classify a profit value
    ///
    /// The non-negative check runs first, so the remaining branches only
    /// ever see losses.
    pub fn classify(profit: Money) -> Self {
        if !profit.is_negative() {
            Self::Healthy
        } else if profit >= WARNING_FLOOR {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    /// Check whether this status reflects a loss
    pub fn is_loss(&self) -> bool {
        !matches!(self, Self::Healthy)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => write!(f, "Healthy"),
            Self::Warning => write!(f, "Warning"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

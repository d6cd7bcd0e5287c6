//! Report formatting utilities for terminal output

use crate::models::{HealthStatus, Money};

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money) -> String {
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", amount) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", amount) // Green for positive
    } else {
        amount.to_string()
    }
}

/// Format a health status with color hints for terminal display
pub fn format_health_colored(status: HealthStatus) -> String {
    let code = match status {
        HealthStatus::Healthy => "32",  // Green
        HealthStatus::Warning => "33",  // Yellow
        HealthStatus::Critical => "31", // Red
    };
    format!("\x1b[{}m{}\x1b[0m", code, status)
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct != 0.0 && pct.abs() < 0.1 {
        format!("{:.2}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(98.4), "98.4%");
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(-5.25), "-5.2%");
    }

    #[test]
    fn test_format_money_colored() {
        assert!(format_money_colored(Money::from_cents(-100)).contains("\x1b[31m"));
        assert!(format_money_colored(Money::from_cents(100)).contains("\x1b[32m"));
        assert_eq!(format_money_colored(Money::zero()), "$0.00");
    }

    #[test]
    fn test_format_health_colored() {
        assert!(format_health_colored(HealthStatus::Healthy).contains("Healthy"));
        assert!(format_health_colored(HealthStatus::Critical).contains("\x1b[31m"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
    }
}

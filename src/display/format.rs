//! Shared formatting helpers for terminal output

use crate::config::Settings;
use crate::models::Money;

/// Format a net balance the way the balances page shows it
///
/// Positive balances get a leading `+`, negative ones a `-`, and anything
/// within a cent of zero reads "Settled".
pub fn format_signed_balance(amount: Money, settings: &Settings) -> String {
    if amount.is_settled() {
        "Settled".to_string()
    } else if amount.is_positive() {
        format!("+{}", settings.format_money(amount))
    } else {
        settings.format_money(amount)
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

//! Terminal formatting
//!
//! Tables are rendered with `tabled`; amounts carry the configured currency
//! symbol after the value (`12.50€`).

pub mod budget;
pub mod stats;
pub mod transaction;

pub use budget::{format_budget_list, format_budget_progress};
pub use stats::{
    format_balance_summary, format_expense_breakdown, format_insights, format_time_series,
};
pub use transaction::{format_transaction_details, format_transaction_list};

pub use crate::analytics::format_amount;

/// Cut `s` to at most `max_chars` characters, marking the cut with "..."
pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Text progress bar, `width` cells wide
pub(crate) fn progress_bar(ratio: f64, width: usize) -> String {
    let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
    let filled = (ratio * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("Cena", 10), "Cena");
        assert_eq!(truncate("Suscripción streaming", 10), "Suscrip...");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.5, 10), "[#####-----]");
        assert_eq!(progress_bar(3.0, 4), "[####]");
        assert_eq!(progress_bar(f64::NAN, 4), "[----]");
    }
}

//! Report formatting utilities for terminal output

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::Money;

/// Width of the bar column in text charts
pub const BAR_WIDTH: usize = 30;

/// How amounts and dates are printed
#[derive(Debug, Clone)]
pub struct DisplayContext {
    pub currency_symbol: String,
    date_format: String,
}

impl DisplayContext {
    /// Build from user settings
    ///
    /// An unparseable date format falls back to `%Y-%m-%d`.
    pub fn from_settings(settings: &Settings) -> Self {
        let date_format = if is_valid_date_format(&settings.date_format) {
            settings.date_format.clone()
        } else {
            tracing::warn!(format = %settings.date_format, "invalid date format, using default");
            "%Y-%m-%d".to_string()
        };

        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format,
        }
    }

    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format a date, falling back to ISO when the format needs time fields
    pub fn date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return date.format("%Y-%m-%d").to_string();
        }
        out
    }
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Check that a strftime string can be rendered without error
pub fn is_valid_date_format(format: &str) -> bool {
    !format.is_empty() && StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
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
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a section header with an underline
pub fn format_header(title: &str) -> String {
    format!("{}\n{}\n", title, separator(title.chars().count()))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

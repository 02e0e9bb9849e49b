//! Calendar month representation
//!
//! A `YearMonth` is the grouping key for monthly totals and the unit of the
//! current/previous month budget window.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month in a specific year
///
/// Field order matters: the derived `Ord` compares year first, then month,
/// which is calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    /// 1-based month number
    pub month: u32,
}

impl YearMonth {
    /// Create a month, returning `None` when `month` is outside 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month before this one, rolling January back to December
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Three-letter month name
    pub fn abbreviation(&self) -> &'static str {
        MONTH_ABBREVIATIONS[(self.month as usize).saturating_sub(1).min(11)]
    }

    /// Chart label, e.g. "Apr 2024"
    pub fn label(&self) -> String {
        format!("{} {}", self.abbreviation(), self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

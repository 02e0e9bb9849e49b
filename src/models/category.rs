//! Category model
//!
//! Categories are plain labels. Transactions and budgets refer to them by
//! name, so removing a category never touches existing records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category names seeded by `spendtrack init`
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Food",
    "Rent",
    "Utilities",
    "Transportation",
    "Entertainment",
    "Healthcare",
    "Shopping",
    "Other",
];

/// A label used to classify transactions and budgets
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// Category name
    pub name: String,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The default category list
    pub fn defaults() -> Vec<Self> {
        DEFAULT_CATEGORIES.iter().map(|name| Self::new(*name)).collect()
    }

    /// Case-insensitive name comparison
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Find a category by name in a live category list
pub fn find_category<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.is_named(name))
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let defaults = Category::defaults();
        assert_eq!(defaults.len(), DEFAULT_CATEGORIES.len());
        assert_eq!(defaults[0].name, "Food");
    }

    #[test]
    fn test_find_category() {
        let categories = Category::defaults();
        assert_eq!(find_category(&categories, "food").unwrap().name, "Food");
        assert_eq!(find_category(&categories, " Rent ").unwrap().name, "Rent");
        assert!(find_category(&categories, "Travel").is_none());
    }

    #[test]
    fn test_validation() {
        assert!(Category::new("Food").validate().is_ok());
        assert_eq!(
            Category::new("  ").validate(),
            Err(CategoryValidationError::EmptyName)
        );
        assert!(matches!(
            Category::new("a".repeat(51)).validate(),
            Err(CategoryValidationError::NameTooLong(51))
        ));
    }
}

//! Expense categories
//!
//! A fixed, closed set of transaction kinds. The wire identifier is the
//! upper-case variant name (`GROCERIES`); the display label capitalizes only
//! the first letter (`Groceries`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Groceries,
    Transportation,
    Health,
    Education,
    Utilities,
    Rent,
    Dining,
    Entertainment,
    Travel,
    Other,
    Payment,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 11] = [
        Self::Groceries,
        Self::Transportation,
        Self::Health,
        Self::Education,
        Self::Utilities,
        Self::Rent,
        Self::Dining,
        Self::Entertainment,
        Self::Travel,
        Self::Other,
        Self::Payment,
    ];

    /// The identifier used in saved files
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::Groceries => "GROCERIES",
            Self::Transportation => "TRANSPORTATION",
            Self::Health => "HEALTH",
            Self::Education => "EDUCATION",
            Self::Utilities => "UTILITIES",
            Self::Rent => "RENT",
            Self::Dining => "DINING",
            Self::Entertainment => "ENTERTAINMENT",
            Self::Travel => "TRAVEL",
            Self::Other => "OTHER",
            Self::Payment => "PAYMENT",
        }
    }

    /// Human-readable label
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Transportation => "Transportation",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Utilities => "Utilities",
            Self::Rent => "Rent",
            Self::Dining => "Dining",
            Self::Entertainment => "Entertainment",
            Self::Travel => "Travel",
            Self::Other => "Other",
            Self::Payment => "Payment",
        }
    }

    /// Parse a category from its identifier or display label, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.identifier().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

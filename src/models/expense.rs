//! Expense model
//!
//! A single recorded transaction: when it happened, what kind it was, how much
//! it cost and a free-form description. Equality covers all four fields.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::money::{format_currency, DEFAULT_SYMBOL};

/// A recorded expense
///
/// Amounts are exact decimals and may be zero or negative (refunds, payments).
/// Once an expense is handed to an `ExpenseTracker` it is shared behind an
/// `Arc` and no longer mutable; edits go through `ExpenseTracker::replace`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expense {
    date: NaiveDate,

    category: Category,

    #[serde(serialize_with = "amount_to_json", deserialize_with = "amount_from_json")]
    amount: BigDecimal,

    #[serde(default, deserialize_with = "null_as_empty")]
    description: String,
}

/// Amounts travel as JSON numbers carrying every digit of the stored value
fn amount_to_json<S>(amount: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serde_json::Number::from_str(&amount.to_string())
        .map_err(S::Error::custom)?
        .serialize(serializer)
}

fn amount_from_json<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    BigDecimal::from_str(&number.to_string()).map_err(D::Error::custom)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Expense {
    /// Create a new expense
    pub fn new(
        date: NaiveDate,
        category: Category,
        amount: BigDecimal,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category,
            amount,
            description: description.into(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn set_amount(&mut self, amount: BigDecimal) {
        self.amount = amount;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Copy of this expense with a different date
    pub fn with_date(&self, date: NaiveDate) -> Self {
        let mut expense = self.clone();
        expense.set_date(date);
        expense
    }

    /// Copy of this expense with a different category
    pub fn with_category(&self, category: Category) -> Self {
        let mut expense = self.clone();
        expense.set_category(category);
        expense
    }

    /// Copy of this expense with a different amount
    pub fn with_amount(&self, amount: BigDecimal) -> Self {
        let mut expense = self.clone();
        expense.set_amount(amount);
        expense
    }

    /// Copy of this expense with a different description
    pub fn with_description(&self, description: impl Into<String>) -> Self {
        let mut expense = self.clone();
        expense.set_description(description);
        expense
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.date.format("%Y-%m-%d"),
            self.category.display_name(),
            format_currency(&self.amount, DEFAULT_SYMBOL),
            self.description
        )
    }
}

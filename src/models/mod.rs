//! Core data models for the expense tracker
//!
//! This module contains the value types of the expense domain: categories,
//! expenses and the currency helpers used to render amounts.

pub mod category;
pub mod expense;
pub mod money;

pub use category::Category;
pub use expense::Expense;
pub use money::{format_currency, parse_amount, round_to_cents, MoneyParseError};

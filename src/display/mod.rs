//! Display formatting for terminal output
//!
//! Turns expenses and categories into the plain-text listings printed by the
//! command-line front end.

pub mod category;
pub mod expense;

pub use category::format_category_menu;
pub use expense::{format_expense_list, format_expense_row};

//! Expense display formatting
//!
//! Listings are numbered from 1; those numbers are what `edit` and `delete`
//! take to pick an expense out of the full listing.

use crate::config::Settings;
use crate::models::{format_currency, Expense};
use crate::storage::ExpenseView;

/// Format a single expense as a numbered listing row
pub fn format_expense_row(number: usize, expense: &Expense, settings: &Settings) -> String {
    format!(
        "{}\t| {}\t{}\t{}\t{}",
        number,
        expense.date().format(&settings.date_format),
        expense.category().display_name(),
        format_currency(expense.amount(), &settings.currency_symbol),
        expense.description()
    )
}

/// Format a view as a numbered listing with total and count
pub fn format_expense_list(view: &ExpenseView, settings: &Settings) -> String {
    if view.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    for (i, expense) in view.iter().enumerate() {
        output.push_str(&format_expense_row(i + 1, expense, settings));
        output.push('\n');
    }

    output.push_str(&"-".repeat(50));
    output.push('\n');
    output.push_str(&format!(
        "Total: {}\n",
        format_currency(&view.total(), &settings.currency_symbol)
    ));

    let count = view.len();
    output.push_str(&format!(
        "Count: {} expense{}\n",
        count,
        if count == 1 { "" } else { "s" }
    ));

    output
}

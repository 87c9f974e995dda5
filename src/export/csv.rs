//! CSV export functionality

use std::io::Write;

use crate::error::ExpenseResult;
use crate::storage::ExpenseView;

/// Write a view as CSV with a header row
///
/// Amounts are written exactly as stored; categories use their identifiers.
pub fn export_view_csv<W: Write>(view: &ExpenseView, writer: W) -> ExpenseResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Date", "Category", "Amount", "Description"])?;

    for expense in view {
        wtr.write_record([
            expense.date().to_string(),
            expense.category().identifier().to_string(),
            expense.amount().to_string(),
            expense.description().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

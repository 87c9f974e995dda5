//! JSON export functionality
//!
//! Uses the save-file format so exported files can be loaded into a tracker.

use std::io::Write;

use crate::error::ExpenseResult;
use crate::storage::ExpenseView;

/// Write a view as a pretty-printed JSON array
pub fn export_view_json<W: Write>(view: &ExpenseView, writer: W) -> ExpenseResult<()> {
    serde_json::to_writer_pretty(writer, view)?;
    Ok(())
}

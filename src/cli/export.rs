//! Export CLI command
//!
//! Writes the listed expenses (after the usual filters) as CSV or JSON, to a
//! file or to stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_view_csv, export_view_json, ExportFormat};
use crate::storage::{ExpenseView, Storage};

use super::expense::FilterArgs;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output format (csv or json)
    #[arg(short, long, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> ExpenseResult<()> {
    let view = args.filter.apply(storage.expenses.snapshot(), None)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_view(&view, args.format, &mut writer)?;
            writer.flush()?;
            println!(
                "Exported {} expense{} to {}",
                view.len(),
                if view.len() == 1 { "" } else { "s" },
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_view(&view, args.format, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

fn write_view<W: Write>(
    view: &ExpenseView,
    format: ExportFormat,
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_view_csv(view, writer),
        ExportFormat::Json => {
            export_view_json(view, &mut *writer)?;
            writeln!(writer)?;
            Ok(())
        }
    }
}

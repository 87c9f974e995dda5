//! Save/load capabilities and the JSON wire format for expenses
//!
//! Saving and loading are separate traits so code that only reads a file
//! does not have to know how to write one. `Persistent` is implemented for
//! anything that can do both.
//!
//! The file is a pretty-printed JSON array of expense objects in date order.
//! Loading streams the array and adds each entry as soon as it is parsed, so a
//! malformed entry stops the load but keeps everything added before it.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use serde::de::{DeserializeSeed, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use tracing::{info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::file_io::write_atomic;
use super::tracker::ExpenseTracker;
use super::view::ExpenseView;

/// Something that can be written to disk
pub trait Saveable {
    fn save(&self, path: &Path) -> ExpenseResult<()>;
}

/// Something that can be read back from disk
pub trait Loadable {
    fn load(&mut self, path: &Path) -> ExpenseResult<()>;
}

/// Something that can be both saved and loaded
pub trait Persistent: Saveable + Loadable {}

impl<T: Saveable + Loadable + ?Sized> Persistent for T {}

/// Outcome of reading an expense list into a tracker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Entries added to the tracker
    pub added: usize,
    /// Entries skipped as duplicates of ones already stored
    pub skipped: usize,
}

impl Serialize for ExpenseView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|e| e.as_ref()))
    }
}

struct LoadInto<'a> {
    tracker: &'a mut ExpenseTracker,
}

impl<'de> DeserializeSeed<'de> for LoadInto<'_> {
    type Value = LoadSummary;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_seq(self)
    }
}

impl<'de> Visitor<'de> for LoadInto<'_> {
    type Value = LoadSummary;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a list of expenses")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut summary = LoadSummary::default();

        while let Some(expense) = seq.next_element::<Expense>()? {
            if self.tracker.add(expense) {
                summary.added += 1;
            } else {
                summary.skipped += 1;
            }
        }

        Ok(summary)
    }
}

impl ExpenseTracker {
    /// Add every expense found in a JSON array
    ///
    /// Duplicates are skipped silently. On error, entries read before the
    /// bad one stay in the tracker.
    pub fn read_json<R: Read>(&mut self, reader: R) -> Result<LoadSummary, serde_json::Error> {
        let mut deserializer = serde_json::Deserializer::from_reader(reader);
        let summary = LoadInto { tracker: self }.deserialize(&mut deserializer)?;
        deserializer.end()?;
        Ok(summary)
    }

    /// Write the current contents as a pretty-printed JSON array
    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(writer, &self.snapshot())
    }
}

impl Saveable for ExpenseTracker {
    fn save(&self, path: &Path) -> ExpenseResult<()> {
        write_atomic(path, |writer| self.write_json(writer))?;
        info!(path = %path.display(), count = self.len(), "expenses saved");
        Ok(())
    }
}

impl Loadable for ExpenseTracker {
    fn load(&mut self, path: &Path) -> ExpenseResult<()> {
        let load_error = |message: String| ExpenseError::Load {
            path: path.to_path_buf(),
            message,
        };

        let file = File::open(path).map_err(|e| load_error(e.to_string()))?;
        let summary = self
            .read_json(BufReader::new(file))
            .map_err(|e| load_error(e.to_string()))?;

        if summary.skipped > 0 {
            warn!(path = %path.display(), skipped = summary.skipped, "duplicate expenses skipped");
        }
        info!(path = %path.display(), added = summary.added, "expenses loaded");
        Ok(())
    }
}

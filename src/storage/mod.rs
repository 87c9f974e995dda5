//! Storage layer for the expense tracker
//!
//! Holds the in-memory expense set and its views, plus the JSON file
//! persistence used to carry them between sessions.

pub mod file_io;
pub mod persist;
pub mod tracker;
pub mod view;

pub use file_io::{is_valid_json, read_json_or_default, write_atomic};
pub use persist::{Loadable, LoadSummary, Persistent, Saveable};
pub use tracker::ExpenseTracker;
pub use view::ExpenseView;

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Pairs the on-disk locations with the session's expense tracker
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseTracker,
}

impl Storage {
    /// Create a new Storage instance with an empty tracker
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            paths,
            expenses: ExpenseTracker::new(),
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Load the expenses file, if one has been saved before
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        let path = self.paths.expenses_file();
        if path.exists() {
            self.expenses.load(&path)?;
        }
        Ok(())
    }

    /// Save all expenses to disk
    pub fn save_all(&self) -> Result<(), ExpenseError> {
        self.expenses.save(&self.paths.expenses_file())
    }

    /// Check if an expenses file has been written yet
    pub fn is_initialized(&self) -> bool {
        self.paths.expenses_file().exists()
    }
}

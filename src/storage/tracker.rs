//! The expense tracker: an owned, deduplicated, date-ordered set of expenses
//!
//! Invariants held after every public call:
//! - no two stored expenses are equal
//! - iteration yields non-decreasing dates, same-date entries in insertion order
//!
//! Stored expenses are shared behind `Arc` and never mutated in place. An edit
//! is expressed as `replace(old, new)`, which re-inserts the new value at its
//! proper position.

use std::sync::Arc;

use tracing::debug;

use crate::models::Expense;

use super::view::ExpenseView;

/// Mutable owner of all expenses in a session
#[derive(Debug, Default)]
pub struct ExpenseTracker {
    expenses: Vec<Arc<Expense>>,
}

impl ExpenseTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a point-in-time view of the current contents
    ///
    /// Later mutations of the tracker are not visible through the view.
    pub fn snapshot(&self) -> ExpenseView {
        ExpenseView::from_sorted(self.expenses.clone())
    }

    /// Add an expense, keeping date order
    ///
    /// Returns `false` without touching the tracker if an equal expense is
    /// already stored.
    pub fn add(&mut self, expense: Expense) -> bool {
        if self.contains(&expense) {
            debug!(
                date = %expense.date(),
                category = %expense.category(),
                "duplicate expense rejected"
            );
            return false;
        }

        let pos = self
            .expenses
            .partition_point(|e| e.date() <= expense.date());
        debug!(
            date = %expense.date(),
            category = %expense.category(),
            position = pos,
            "expense added"
        );
        self.expenses.insert(pos, Arc::new(expense));
        true
    }

    /// Remove the stored expense equal to `expense`
    ///
    /// Returns `false` if no equal expense exists.
    pub fn delete(&mut self, expense: &Expense) -> bool {
        match self.position(expense) {
            Some(index) => {
                self.expenses.remove(index);
                debug!(date = %expense.date(), category = %expense.category(), "expense deleted");
                true
            }
            None => false,
        }
    }

    /// Swap a stored expense for an edited copy
    ///
    /// Returns `false` and leaves the tracker unchanged when `old` is not
    /// stored, or when `new` would duplicate a different stored expense.
    pub fn replace(&mut self, old: &Expense, new: Expense) -> bool {
        let Some(index) = self.position(old) else {
            return false;
        };

        if *old == new {
            return true;
        }
        if self.contains(&new) {
            debug!(
                date = %new.date(),
                category = %new.category(),
                "edit would duplicate an existing expense"
            );
            return false;
        }

        self.expenses.remove(index);
        self.add(new)
    }

    pub fn contains(&self, expense: &Expense) -> bool {
        self.position(expense).is_some()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    fn position(&self, expense: &Expense) -> Option<usize> {
        self.expenses.iter().position(|e| e.as_ref() == expense)
    }
}

//! Immutable, date-ordered views over expenses
//!
//! A view is a point-in-time list of shared expense references. Refinements
//! (`filter_by_category`, `filter_by_date_range`, `limit_to_amount`) build new
//! views from the receiver's own contents and never touch the receiver or the
//! tracker it came from.

use std::sync::Arc;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense};

/// An immutable, ascending-by-date sequence of expenses
#[derive(Debug, Clone)]
pub struct ExpenseView {
    expenses: Arc<[Arc<Expense>]>,
}

impl ExpenseView {
    /// Build a view by copying the given sequence
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the sequence is not sorted ascending by
    /// date. The input is never sorted on the caller's behalf.
    pub fn new<I>(expenses: I) -> ExpenseResult<Self>
    where
        I: IntoIterator<Item = Arc<Expense>>,
    {
        let expenses: Vec<Arc<Expense>> = expenses.into_iter().collect();

        if let Some(pos) = expenses.windows(2).position(|w| w[0].date() > w[1].date()) {
            return Err(ExpenseError::InvalidArgument(format!(
                "expenses must be sorted by date: {} at position {} comes after {}",
                expenses[pos + 1].date(),
                pos + 1,
                expenses[pos].date()
            )));
        }

        Ok(Self::from_sorted(expenses))
    }

    /// Caller guarantees `expenses` is already in date order
    pub(crate) fn from_sorted(expenses: Vec<Arc<Expense>>) -> Self {
        debug_assert!(expenses.windows(2).all(|w| w[0].date() <= w[1].date()));
        Self {
            expenses: expenses.into(),
        }
    }

    fn refine<F>(&self, keep: F) -> Self
    where
        F: Fn(&Expense) -> bool,
    {
        Self::from_sorted(
            self.expenses
                .iter()
                .filter(|e| keep(e))
                .cloned()
                .collect(),
        )
    }

    /// Keep only expenses of the given category
    pub fn filter_by_category(&self, category: Category) -> Self {
        self.refine(|e| e.category() == category)
    }

    /// Keep only expenses dated within `[start, end]`, inclusive
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `start` is after `end`.
    pub fn filter_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> ExpenseResult<Self> {
        if start > end {
            return Err(ExpenseError::InvalidArgument(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }

        Ok(self.refine(|e| (start..=end).contains(&e.date())))
    }

    /// Keep the earliest `limit` expenses
    pub fn limit_to_amount(&self, limit: usize) -> Self {
        Self::from_sorted(self.expenses.iter().take(limit).cloned().collect())
    }

    /// Copy the contents into a new list
    ///
    /// The list is independent of the view, but the expenses themselves are
    /// the same shared values held by the view and its tracker.
    pub fn to_list(&self) -> Vec<Arc<Expense>> {
        self.expenses.to_vec()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Expense>> {
        self.expenses.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Expense>> {
        self.expenses.iter()
    }

    /// Sum of all amounts in the view
    pub fn total(&self) -> BigDecimal {
        self.expenses.iter().map(|e| e.amount()).sum()
    }
}

impl Default for ExpenseView {
    fn default() -> Self {
        Self::from_sorted(Vec::new())
    }
}

impl<'a> IntoIterator for &'a ExpenseView {
    type Item = &'a Arc<Expense>;
    type IntoIter = std::slice::Iter<'a, Arc<Expense>>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.iter()
    }
}

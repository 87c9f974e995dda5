//! Expense tracker - record personal expenses and query them from the terminal
//!
//! The core is a deduplicated, date-ordered expense store with immutable views
//! that can be filtered by category and date range and limited to the earliest
//! entries. Expenses are kept in a pretty-printed JSON file between sessions.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory and user settings
//! - `error`: Custom error types
//! - `models`: Categories, expenses and currency helpers
//! - `storage`: The expense tracker, its views and JSON persistence
//! - `display`: Plain-text listings
//! - `export`: CSV and JSON export of views
//! - `cli`: Command handlers for the `expenses` binary
//!
//! # Example
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//! use expense_tracker::models::{Category, Expense};
//! use expense_tracker::storage::ExpenseTracker;
//!
//! let mut tracker = ExpenseTracker::new();
//! let lunch = Expense::new(
//!     NaiveDate::from_ymd_opt(2025, 8, 11).unwrap(),
//!     Category::Dining,
//!     BigDecimal::new(2375.into(), 2),
//!     "Ramen",
//! );
//! assert!(tracker.add(lunch.clone()));
//! assert!(!tracker.add(lunch));
//!
//! let dining = tracker.snapshot().filter_by_category(Category::Dining);
//! assert_eq!(dining.len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};

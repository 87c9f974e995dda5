//! Expense CLI commands
//!
//! Implements the add/list/edit/delete commands on top of the tracker and its
//! views. Mutating commands save the expenses file before returning.

use bigdecimal::num_bigint::Sign;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::config::Settings;
use crate::display::{format_category_menu, format_expense_list};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_amount, round_to_cents, Category, Expense};
use crate::storage::{ExpenseView, Storage};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Date of the expense (YYYY-MM-DD)
        date: String,
        /// Category (e.g. groceries, dining); see `categories`
        category: String,
        /// Amount (e.g. "12.50"), must not be negative
        amount: String,
        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List expenses, oldest first
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Edit one expense, picked by its number in the unfiltered listing
    Edit {
        /// Expense number as shown by `list`
        number: usize,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New amount
        #[arg(long)]
        amount: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete one expense, picked by its number in the unfiltered listing
    Delete {
        /// Expense number as shown by `list`
        number: usize,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Show the available categories
    Categories,
}

/// Refinements shared by `list` and `export`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only expenses in this category
    #[arg(short, long)]
    pub category: Option<String>,
    /// Start of the date range (YYYY-MM-DD), requires --to
    #[arg(long)]
    pub from: Option<String>,
    /// End of the date range (YYYY-MM-DD), requires --from
    #[arg(long)]
    pub to: Option<String>,
    /// Show at most this many (earliest) expenses
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

impl FilterArgs {
    /// Refine a view by category, then date range, then limit
    pub fn apply(
        &self,
        view: ExpenseView,
        default_limit: Option<usize>,
    ) -> ExpenseResult<ExpenseView> {
        let mut view = view;

        if let Some(name) = &self.category {
            view = view.filter_by_category(parse_category(name)?);
        }

        match (&self.from, &self.to) {
            (Some(from), Some(to)) => {
                view = view.filter_by_date_range(parse_date(from)?, parse_date(to)?)?;
            }
            (None, None) => {}
            _ => {
                return Err(ExpenseError::Validation(
                    "--from and --to must be given together".into(),
                ))
            }
        }

        if let Some(limit) = self.limit.or(default_limit) {
            view = view.limit_to_amount(limit);
        }

        Ok(view)
    }
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::Add {
            date,
            category,
            amount,
            description,
        } => {
            let expense = Expense::new(
                parse_date(&date)?,
                parse_category(&category)?,
                parse_entered_amount(&amount)?,
                description.unwrap_or_default().trim(),
            );

            if storage.expenses.add(expense.clone()) {
                storage.save_all()?;
                println!("Added expense: {}", expense);
            } else {
                println!("Expense already recorded, nothing added: {}", expense);
            }
        }

        ExpenseCommands::List { filter } => {
            let view = filter.apply(storage.expenses.snapshot(), settings.default_list_limit)?;
            print!("{}", format_expense_list(&view, settings));
        }

        ExpenseCommands::Edit {
            number,
            date,
            category,
            amount,
            description,
        } => {
            let old = select(&storage.expenses.snapshot(), number)?;

            if date.is_none() && category.is_none() && amount.is_none() && description.is_none() {
                return Err(ExpenseError::Validation(
                    "Nothing to edit: pass --date, --category, --amount or --description".into(),
                ));
            }

            let mut edited = old.clone();
            if let Some(date) = date {
                edited.set_date(parse_date(&date)?);
            }
            if let Some(category) = category {
                edited.set_category(parse_category(&category)?);
            }
            if let Some(amount) = amount {
                edited.set_amount(parse_entered_amount(&amount)?);
            }
            if let Some(description) = description {
                edited.set_description(description.trim());
            }

            if !storage.expenses.replace(&old, edited.clone()) {
                return Err(ExpenseError::Validation(format!(
                    "An identical expense already exists: {}",
                    edited
                )));
            }

            storage.save_all()?;
            println!("Updated expense: {}", edited);
        }

        ExpenseCommands::Delete { number, force } => {
            let expense = select(&storage.expenses.snapshot(), number)?;

            if !force {
                println!("About to delete expense:");
                println!("  {}", expense);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            if storage.expenses.delete(&expense) {
                storage.save_all()?;
                println!("Deleted expense: {}", expense);
            }
        }

        ExpenseCommands::Categories => {
            print!("{}", format_category_menu());
        }
    }

    Ok(())
}

/// Pick the expense shown as `number` (1-based) in a listing
fn select(view: &ExpenseView, number: usize) -> ExpenseResult<Expense> {
    number
        .checked_sub(1)
        .and_then(|index| view.get(index))
        .map(|e| e.as_ref().clone())
        .ok_or_else(|| ExpenseError::expense_not_found(number.to_string()))
}

pub(crate) fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

pub(crate) fn parse_category(s: &str) -> ExpenseResult<Category> {
    Category::parse(s).ok_or_else(|| ExpenseError::category_not_found(s))
}

/// Amounts typed at the prompt are non-negative and kept to the cent
fn parse_entered_amount(s: &str) -> ExpenseResult<BigDecimal> {
    let amount = parse_amount(s).map_err(|e| {
        ExpenseError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '12.50'. Error: {}",
            s, e
        ))
    })?;

    if amount.sign() == Sign::Minus {
        return Err(ExpenseError::Validation(format!(
            "Amount must be non-negative: {}",
            s
        )));
    }

    Ok(round_to_cents(&amount))
}

//! Currency helpers for decimal amounts
//!
//! Amounts are `BigDecimal` values of any precision. Formatting rounds to
//! cents for display only; the stored value is never changed.

use bigdecimal::num_bigint::Sign;
use bigdecimal::{BigDecimal, RoundingMode};
use std::fmt;
use std::str::FromStr;

/// Default currency symbol used by `Expense`'s `Display` impl
pub const DEFAULT_SYMBOL: &str = "$";

/// Format an amount with a currency symbol and exactly two decimal places
///
/// Negative values carry the sign before the symbol (`-$20.00`). Halves are
/// rounded to the nearest even cent and the whole part is grouped by
/// thousands (`$1,234.50`).
pub fn format_currency(amount: &BigDecimal, symbol: &str) -> String {
    let (cents, _) = amount
        .with_scale_round(2, RoundingMode::HalfEven)
        .into_bigint_and_exponent();

    let mut digits = cents.magnitude().to_string();
    while digits.len() < 3 {
        digits.insert(0, '0');
    }
    let (whole, frac) = digits.split_at(digits.len() - 2);
    let whole = group_thousands(whole);

    if cents.sign() == Sign::Minus {
        format!("-{}{}.{}", symbol, whole, frac)
    } else {
        format!("{}{}.{}", symbol, whole, frac)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse an amount typed by a user
///
/// Accepts formats: "10.50", "-10.50", "$10.50", "-$1,050", "10"
pub fn parse_amount(s: &str) -> Result<BigDecimal, MoneyParseError> {
    let trimmed = s.trim();

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, trimmed),
    };
    let rest = rest.strip_prefix('$').unwrap_or(rest).replace(',', "");

    if rest.is_empty() || rest.starts_with(['-', '+']) {
        return Err(MoneyParseError::InvalidFormat(s.to_string()));
    }

    let value = BigDecimal::from_str(&rest)
        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

    Ok(if negative { -value } else { value })
}

/// Round to whole cents, halves away from zero, keeping a scale of two
pub fn round_to_cents(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(2, RoundingMode::HalfUp)
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

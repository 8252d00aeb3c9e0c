//! # Money
//!
//! Decimal amounts tagged with an ISO 4217 currency.
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use transfer_search::domain::value_objects::{Currency, Money};
//!
//! let price = Money::new(Decimal::new(4250, 2), Currency::new("eur").unwrap()).unwrap();
//! assert_eq!(price.to_string(), "42.50 EUR");
//! assert!(price.is_positive());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-letter ISO 4217 currency code, stored upper-case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Creates a currency code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCurrency` unless the code is exactly three
    /// ASCII letters.
    pub fn new(code: &str) -> DomainResult<Self> {
        let code = code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidCurrency(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-negative monetary amount in a given currency.
///
/// # Invariants
///
/// - `amount >= 0`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a monetary amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the amount is negative.
    pub fn new(amount: Decimal, currency: Currency) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::InvalidPrice(format!(
                "amount must not be negative: {amount}"
            )));
        }
        Ok(Self { amount, currency })
    }

    /// Returns the amount.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns true if the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

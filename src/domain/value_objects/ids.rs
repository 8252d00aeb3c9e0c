//! # Identifiers
//!
//! Strongly typed identifiers used across the search pipeline.
//!
//! - [`SupplierCode`]: stable code of an integrated supplier
//! - [`SearchId`]: UUID assigned to one aggregate search
//! - [`OfferId`]: supplier-provided offer identifier
//! - [`LocationId`]: pickup or dropoff place identifier

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of a transfer supplier.
///
/// Used as the registry key and as the correlation tag on every offer and
/// every supplier failure.
///
/// # Examples
///
/// ```
/// use transfer_search::domain::value_objects::SupplierCode;
///
/// let code = SupplierCode::parse("  hoppa ").unwrap();
/// assert_eq!(code.as_str(), "hoppa");
/// assert!(SupplierCode::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierCode(String);

impl SupplierCode {
    /// Creates a supplier code without validation.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Parses a supplier code, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSupplierCode` if the code is blank or
    /// contains inner whitespace.
    pub fn parse(code: &str) -> DomainResult<Self> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidSupplierCode(
                "code must not be empty".to_string(),
            ));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidSupplierCode(format!(
                "code must not contain whitespace: {trimmed:?}"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SupplierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SupplierCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Unique identifier of one aggregate search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchId(Uuid);

impl SearchId {
    /// Generates a fresh random search id.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[inline]
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for SearchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Offer identifier assigned by the supplier.
///
/// Only unique within one supplier's response.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferId(String);

impl OfferId {
    /// Creates an offer id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the id is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a pickup or dropoff place (airport code, place id, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

impl LocationId {
    /// Creates a location id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if both ids name the same place, ignoring case and
    /// surrounding whitespace.
    #[must_use]
    pub fn same_place(&self, other: &Self) -> bool {
        self.0.trim().eq_ignore_ascii_case(other.0.trim())
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

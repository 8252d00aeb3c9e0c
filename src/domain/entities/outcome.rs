//! # Supplier Search Outcome
//!
//! The terminal result of dispatching one supplier during a search.

use crate::domain::entities::offer::Offer;
use crate::domain::value_objects::{FailureKind, SupplierCode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A supplier that did not contribute offers, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierFailure {
    supplier: SupplierCode,
    kind: FailureKind,
    message: String,
}

impl SupplierFailure {
    /// Creates a failure entry.
    #[must_use]
    pub fn new(supplier: SupplierCode, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            supplier,
            kind,
            message: message.into(),
        }
    }

    /// Returns the failed supplier's code.
    #[inline]
    #[must_use]
    pub fn supplier(&self) -> &SupplierCode {
        &self.supplier
    }

    /// Returns the failure classification.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Returns the diagnostic message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SupplierFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed ({}): {}", self.supplier, self.kind, self.message)
    }
}

/// Exactly one of these is produced per dispatched supplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupplierSearchOutcome {
    /// The supplier answered; `offers` may be empty.
    Success {
        /// Supplier that answered.
        supplier: SupplierCode,
        /// Offers in the order the supplier returned them.
        offers: Vec<Offer>,
    },
    /// The supplier did not answer usefully.
    Failure(SupplierFailure),
}

impl SupplierSearchOutcome {
    /// Creates a success outcome.
    #[must_use]
    pub fn success(supplier: SupplierCode, offers: Vec<Offer>) -> Self {
        Self::Success { supplier, offers }
    }

    /// Creates a failure outcome.
    #[must_use]
    pub fn failure(supplier: SupplierCode, kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure(SupplierFailure::new(supplier, kind, message))
    }

    /// Returns the supplier this outcome belongs to.
    #[must_use]
    pub fn supplier(&self) -> &SupplierCode {
        match self {
            Self::Success { supplier, .. } => supplier,
            Self::Failure(failure) => failure.supplier(),
        }
    }

    /// Returns true for a success outcome.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the offers of a success outcome, or an empty slice.
    #[must_use]
    pub fn offers(&self) -> &[Offer] {
        match self {
            Self::Success { offers, .. } => offers,
            Self::Failure(_) => &[],
        }
    }

    /// Returns the failure, if this outcome is one.
    #[must_use]
    pub fn as_failure(&self) -> Option<&SupplierFailure> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(failure) => Some(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_accessors() {
        let outcome = SupplierSearchOutcome::success(SupplierCode::new("a"), vec![]);
        assert!(outcome.is_success());
        assert_eq!(outcome.supplier().as_str(), "a");
        assert!(outcome.offers().is_empty());
        assert!(outcome.as_failure().is_none());
    }

    #[test]
    fn failure_accessors() {
        let outcome =
            SupplierSearchOutcome::failure(SupplierCode::new("b"), FailureKind::Timeout, "slow");
        assert!(!outcome.is_success());
        assert_eq!(outcome.supplier().as_str(), "b");
        let failure = outcome.as_failure();
        assert_eq!(failure.map(SupplierFailure::kind), Some(FailureKind::Timeout));
        assert_eq!(
            failure.map(ToString::to_string).as_deref(),
            Some("b failed (timeout): slow")
        );
    }
}

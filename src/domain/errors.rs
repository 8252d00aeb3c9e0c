//! # Domain Errors
//!
//! Error types raised when a value object or entity rejects its input.
//!
//! # Examples
//!
//! ```
//! use transfer_search::domain::errors::DomainError;
//!
//! let err = DomainError::InvalidPassengerCount(0);
//! assert!(err.to_string().contains("passenger"));
//! ```

use thiserror::Error;

/// Error type for domain validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Supplier code is empty or malformed.
    #[error("invalid supplier code: {0}")]
    InvalidSupplierCode(String),

    /// Location is missing an identifier or carries bad coordinates.
    #[error("invalid location: {0}")]
    InvalidLocation(String),

    /// Pickup and dropoff resolve to the same place.
    #[error("pickup and dropoff must differ, both are {0}")]
    SameLocation(String),

    /// Passenger count must be at least one.
    #[error("invalid passenger count: {0}")]
    InvalidPassengerCount(u32),

    /// Currency is not a three-letter ISO 4217 code.
    #[error("invalid currency: {0}")]
    InvalidCurrency(String),

    /// Monetary amount is unusable.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Supplier offer failed normalization.
    #[error("invalid offer: {0}")]
    InvalidOffer(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = DomainError::SameLocation("LHR".to_string());
        assert!(err.to_string().contains("LHR"));

        let err = DomainError::InvalidCurrency("EU".to_string());
        assert_eq!(err.to_string(), "invalid currency: EU");
    }
}

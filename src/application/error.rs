//! # Application Errors
//!
//! What the service layer can return to a caller.
//!
//! Supplier-side failures are absent on purpose: the orchestrator records
//! them in the search summary. Only caller mistakes surface here.
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)  - value object rejected the input
//! ├── Validation(String)   - request rejected before dispatch
//! └── NotFound             - unknown supplier code
//! ```
//!
//! # Examples
//!
//! ```
//! use transfer_search::application::error::ApplicationError;
//!
//! let err = ApplicationError::validation("passenger count must be positive");
//! assert!(err.is_validation());
//!
//! let err = ApplicationError::not_found("supplier", "acme");
//! assert!(err.is_not_found());
//! ```

use crate::domain::errors::DomainError;
use thiserror::Error;

/// Service layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A value object refused the input.
    #[error("invalid input: {0}")]
    Domain(#[from] DomainError),

    /// The search request is unusable.
    #[error("invalid request: {0}")]
    Validation(String),

    /// No such resource.
    #[error("unknown {kind}: {id}")]
    NotFound {
        /// What was looked up, e.g. `supplier`.
        kind: &'static str,
        /// The identifier that matched nothing.
        id: String,
    },
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Returns true for an unknown resource.
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if the caller supplied invalid input.
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Domain(_))
    }
}

/// Result type for service operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

//! # Supplier Errors
//!
//! Error types for supplier adapter operations.
//!
//! Every [`SupplierError`] maps onto one [`FailureKind`], which is what ends
//! up in the search summary.
//!
//! # Examples
//!
//! ```
//! use transfer_search::domain::value_objects::FailureKind;
//! use transfer_search::infrastructure::suppliers::error::SupplierError;
//!
//! let error = SupplierError::timeout("no answer after 5000ms");
//! assert_eq!(error.kind(), FailureKind::Timeout);
//!
//! let error = SupplierError::no_availability("fully booked");
//! assert_eq!(error.kind(), FailureKind::BusinessRejection);
//! ```

use crate::domain::value_objects::FailureKind;
use thiserror::Error;

/// Error type for supplier adapter operations.
#[derive(Debug, Clone, Error)]
pub enum SupplierError {
    /// Request timed out.
    #[error("supplier timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds.
        timeout_ms: Option<u64>,
    },

    /// Network or connection error.
    #[error("supplier connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Authentication or authorization failure.
    #[error("supplier authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("supplier rate limit exceeded: {message}")]
    RateLimited {
        /// Error message.
        message: String,
    },

    /// The supplier refused the request parameters.
    #[error("supplier rejected request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// No vehicles for this route or time.
    #[error("supplier has no availability: {message}")]
    NoAvailability {
        /// Error message.
        message: String,
    },

    /// Supplier declined for a business reason.
    #[error("supplier declined: {message}")]
    Rejected {
        /// Error message.
        message: String,
        /// Supplier-specific error code.
        code: Option<String>,
    },

    /// Response could not be parsed or failed normalization.
    #[error("supplier protocol error: {message}")]
    ProtocolError {
        /// Error message.
        message: String,
    },

    /// Adapter-side failure unrelated to the supplier.
    #[error("supplier adapter internal error: {message}")]
    InternalError {
        /// Error message.
        message: String,
    },
}

impl SupplierError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with duration.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a rate limited error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a no availability error.
    #[must_use]
    pub fn no_availability(message: impl Into<String>) -> Self {
        Self::NoAvailability {
            message: message.into(),
        }
    }

    /// Creates a business rejection with an optional supplier code.
    #[must_use]
    pub fn rejected(message: impl Into<String>, code: Option<String>) -> Self {
        Self::Rejected {
            message: message.into(),
            code,
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol_error(message: impl Into<String>) -> Self {
        Self::ProtocolError {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Classifies this error for the search summary.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Timeout { .. } => FailureKind::Timeout,
            Self::Connection { .. } | Self::Authentication { .. } | Self::RateLimited { .. } => {
                FailureKind::Transport
            }
            Self::InvalidRequest { .. } | Self::NoAvailability { .. } | Self::Rejected { .. } => {
                FailureKind::BusinessRejection
            }
            Self::ProtocolError { .. } => FailureKind::MalformedResponse,
            Self::InternalError { .. } => FailureKind::Internal,
        }
    }

    /// Returns the supplier's own error code, if any.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Rejected { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

/// Result type for supplier operations.
pub type SupplierResult<T> = Result<T, SupplierError>;

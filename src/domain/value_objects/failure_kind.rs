//! # Failure Kind
//!
//! Classification of a supplier's failed search.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a supplier did not contribute offers to a search.
///
/// # Examples
///
/// ```
/// use transfer_search::domain::value_objects::FailureKind;
///
/// assert_eq!(FailureKind::Timeout.to_string(), "timeout");
/// assert_eq!(FailureKind::MalformedResponse.to_string(), "malformed_response");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The per-supplier or the overall deadline passed first.
    Timeout,
    /// Network, TLS, authentication or upstream server failure.
    Transport,
    /// The supplier answered with something that could not be understood.
    MalformedResponse,
    /// The supplier answered but declined (no availability, route not served).
    BusinessRejection,
    /// The adapter task itself crashed.
    Internal,
}

impl FailureKind {
    /// Returns the stable snake_case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Transport => "transport",
            Self::MalformedResponse => "malformed_response",
            Self::BusinessRejection => "business_rejection",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn serde_matches_display() {
        for kind in [
            FailureKind::Timeout,
            FailureKind::Transport,
            FailureKind::MalformedResponse,
            FailureKind::BusinessRejection,
            FailureKind::Internal,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }
}

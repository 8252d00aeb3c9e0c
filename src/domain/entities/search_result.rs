//! # Search Result
//!
//! The aggregate response of one search: merged offers plus a summary of
//! which suppliers contributed and which failed.

use crate::domain::entities::offer::Offer;
use crate::domain::entities::outcome::SupplierFailure;
use crate::domain::value_objects::{SearchId, SupplierCode, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which suppliers took part in a search and how each one ended.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchSummary {
    queried: usize,
    succeeded: Vec<SupplierCode>,
    failed: Vec<SupplierFailure>,
}

impl SearchSummary {
    /// Creates a summary.
    #[must_use]
    pub fn new(queried: usize, succeeded: Vec<SupplierCode>, failed: Vec<SupplierFailure>) -> Self {
        Self {
            queried,
            succeeded,
            failed,
        }
    }

    /// Returns how many suppliers were dispatched.
    #[inline]
    #[must_use]
    pub fn queried(&self) -> usize {
        self.queried
    }

    /// Returns the suppliers that answered, in registration order.
    #[inline]
    #[must_use]
    pub fn succeeded(&self) -> &[SupplierCode] {
        &self.succeeded
    }

    /// Returns the suppliers that failed, in registration order.
    #[inline]
    #[must_use]
    pub fn failed(&self) -> &[SupplierFailure] {
        &self.failed
    }

    /// Returns true if some but not all dispatched suppliers failed.
    #[must_use]
    pub fn is_partial_failure(&self) -> bool {
        !self.failed.is_empty() && !self.succeeded.is_empty()
    }

    /// Returns true if suppliers were dispatched and every one failed.
    #[must_use]
    pub fn all_failed(&self) -> bool {
        self.queried > 0 && self.succeeded.is_empty()
    }
}

/// The immutable result of one aggregate search.
///
/// Created fresh per search and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    search_id: SearchId,
    offers: Vec<Offer>,
    summary: SearchSummary,
    created_at: Timestamp,
    elapsed_ms: u64,
}

impl SearchResult {
    /// Creates a search result.
    #[must_use]
    pub fn new(search_id: SearchId, offers: Vec<Offer>, summary: SearchSummary) -> Self {
        Self {
            search_id,
            offers,
            summary,
            created_at: Timestamp::now(),
            elapsed_ms: 0,
        }
    }

    /// Records how long the search took.
    #[must_use]
    pub fn with_elapsed_ms(mut self, elapsed_ms: u64) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }

    /// Returns the search id.
    #[inline]
    #[must_use]
    pub fn search_id(&self) -> SearchId {
        self.search_id
    }

    /// Returns the merged offers, best first.
    #[inline]
    #[must_use]
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Returns the supplier summary.
    #[inline]
    #[must_use]
    pub fn summary(&self) -> &SearchSummary {
        &self.summary
    }

    /// Returns when the result was assembled.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns the search duration in milliseconds.
    #[inline]
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Returns the cheapest offer, if any.
    #[must_use]
    pub fn best_offer(&self) -> Option<&Offer> {
        self.offers.first()
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SearchResult({}: {} offers, {}/{} suppliers ok)",
            self.search_id,
            self.offers.len(),
            self.summary.succeeded.len(),
            self.summary.queried
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::FailureKind;

    #[test]
    fn summary_flags() {
        let empty = SearchSummary::default();
        assert!(!empty.all_failed());
        assert!(!empty.is_partial_failure());

        let partial = SearchSummary::new(
            2,
            vec![SupplierCode::new("a")],
            vec![SupplierFailure::new(
                SupplierCode::new("b"),
                FailureKind::Transport,
                "refused",
            )],
        );
        assert!(partial.is_partial_failure());
        assert!(!partial.all_failed());

        let all = SearchSummary::new(
            1,
            vec![],
            vec![SupplierFailure::new(
                SupplierCode::new("b"),
                FailureKind::Timeout,
                "slow",
            )],
        );
        assert!(all.all_failed());
    }

    #[test]
    fn empty_result() {
        let result = SearchResult::new(SearchId::new_v4(), vec![], SearchSummary::default())
            .with_elapsed_ms(12);
        assert!(result.best_offer().is_none());
        assert_eq!(result.elapsed_ms(), 12);
        assert!(result.to_string().contains("0 offers"));
    }
}

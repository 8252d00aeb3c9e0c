//! # Result Assembler
//!
//! Merges per-supplier outcomes into one ordered offer list and builds the
//! search result envelope.
//!
//! # Merge Rules
//!
//! 1. Offers with the same supplier code and supplier offer id collapse to
//!    the first occurrence. Offers of different suppliers never collapse.
//! 2. Ascending by price amount.
//! 3. Ties by the supplier's position in the outcome list, then by the
//!    offer's position in that supplier's answer.
//! 4. Optional truncation to `max_offers`.
//!
//! Currencies are not converted; amounts are compared as given.

use crate::domain::entities::{
    Offer, SearchResult, SearchSummary, SupplierFailure, SupplierSearchOutcome,
};
use crate::domain::value_objects::{OfferId, SearchId, SupplierCode};
use std::collections::HashSet;

/// Pure merge and envelope logic of a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultAssembler {
    max_offers: Option<usize>,
}

impl ResultAssembler {
    /// Creates an assembler without an offer limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits merged results to `max` offers.
    #[must_use]
    pub fn with_max_offers(mut self, max: usize) -> Self {
        self.max_offers = Some(max);
        self
    }

    /// Returns the offer limit.
    #[inline]
    #[must_use]
    pub fn max_offers(&self) -> Option<usize> {
        self.max_offers
    }

    /// Deduplicates and orders the offers of all successful outcomes.
    #[must_use]
    pub fn merge(&self, outcomes: &[SupplierSearchOutcome]) -> Vec<Offer> {
        let mut seen: HashSet<(&SupplierCode, &OfferId)> = HashSet::new();
        let mut ranked: Vec<(usize, usize, &Offer)> = Vec::new();

        for (supplier_index, outcome) in outcomes.iter().enumerate() {
            for (offer_index, offer) in outcome.offers().iter().enumerate() {
                if seen.insert((offer.supplier_code(), offer.offer_id())) {
                    ranked.push((supplier_index, offer_index, offer));
                }
            }
        }

        ranked.sort_by_key(|(supplier_index, offer_index, offer)| {
            (offer.price().amount(), *supplier_index, *offer_index)
        });

        if let Some(max) = self.max_offers {
            ranked.truncate(max);
        }

        ranked
            .into_iter()
            .map(|(_, _, offer)| offer.clone())
            .collect()
    }

    /// Summarizes which suppliers answered and which failed.
    #[must_use]
    pub fn summarize(outcomes: &[SupplierSearchOutcome]) -> SearchSummary {
        let mut succeeded = Vec::new();
        let mut failed: Vec<SupplierFailure> = Vec::new();

        for outcome in outcomes {
            match outcome {
                SupplierSearchOutcome::Success { supplier, .. } => succeeded.push(supplier.clone()),
                SupplierSearchOutcome::Failure(failure) => failed.push(failure.clone()),
            }
        }

        SearchSummary::new(outcomes.len(), succeeded, failed)
    }

    /// Builds the result of search `search_id` from its outcomes.
    #[must_use]
    pub fn assemble(&self, search_id: SearchId, outcomes: &[SupplierSearchOutcome]) -> SearchResult {
        SearchResult::new(search_id, self.merge(outcomes), Self::summarize(outcomes))
    }
}

//! # Transfer Supplier Trait
//!
//! Port definition for supplier integrations.
//!
//! Every backend the aggregator talks to implements [`TransferSupplier`]:
//! a stable code, a live enabled flag and a search operation returning
//! normalized offers or a [`SupplierError`](super::error::SupplierError).
//!
//! # Examples
//!
//! ```ignore
//! use transfer_search::infrastructure::suppliers::{SearchContext, TransferSupplier};
//! use transfer_search::infrastructure::suppliers::error::SupplierResult;
//!
//! #[derive(Debug)]
//! struct MySupplier { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl TransferSupplier for MySupplier {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::{SearchRequest, SupplierOffer};
use crate::domain::value_objects::{SearchId, SupplierCode};
use crate::infrastructure::suppliers::error::SupplierResult;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

/// Per-dispatch information handed to an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchContext {
    search_id: SearchId,
    deadline: Instant,
}

impl SearchContext {
    /// Creates a context.
    #[must_use]
    pub fn new(search_id: SearchId, deadline: Instant) -> Self {
        Self {
            search_id,
            deadline,
        }
    }

    /// Returns the id of the search this dispatch belongs to.
    #[inline]
    #[must_use]
    pub fn search_id(&self) -> SearchId {
        self.search_id
    }

    /// Returns the instant by which the adapter must have answered.
    #[inline]
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Returns the time left until the deadline, zero once it has passed.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }
}

/// Trait defining the interface for supplier adapters.
///
/// # Deadlines
///
/// The orchestrator enforces the deadline in [`SearchContext`] regardless of
/// the adapter, but adapters should bound their own I/O by
/// [`SearchContext::remaining`] so that connections are not left dangling.
///
/// # Error Handling
///
/// Implementations map backend-specific failures onto `SupplierError`
/// variants; the variant decides the failure kind reported to callers.
#[async_trait]
pub trait TransferSupplier: Send + Sync + fmt::Debug {
    /// Returns the supplier's stable code.
    fn code(&self) -> &SupplierCode;

    /// Returns the supplier's current enabled state.
    fn is_enabled(&self) -> bool;

    /// Returns an adapter-specific per-call timeout, if the adapter has one.
    ///
    /// `None` means the orchestrator's configured per-supplier timeout applies.
    fn timeout(&self) -> Option<Duration> {
        None
    }

    /// Searches the supplier for offers matching `request`.
    ///
    /// # Errors
    ///
    /// - `SupplierError::Timeout` - Supplier did not answer in time
    /// - `SupplierError::Connection` - Network or upstream failure
    /// - `SupplierError::ProtocolError` - Unparseable response
    /// - `SupplierError::NoAvailability` / `Rejected` - Supplier declined
    async fn search(
        &self,
        request: &SearchRequest,
        context: &SearchContext,
    ) -> SupplierResult<Vec<SupplierOffer>>;
}

//! # Search Request
//!
//! Immutable description of one transfer search.
//!
//! # Examples
//!
//! ```
//! use transfer_search::domain::entities::SearchRequest;
//! use transfer_search::domain::value_objects::Location;
//!
//! let request = SearchRequest::new(
//!     Location::new("LHR").unwrap(),
//!     Location::new("hotel-savoy").unwrap(),
//!     3,
//! )
//! .unwrap();
//!
//! assert_eq!(request.passengers(), 3);
//! assert!(request.pickup_at().is_none());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Currency, Location, Timestamp};
use serde::Serialize;
use std::fmt;

/// A validated search request.
///
/// # Invariants
///
/// - Pickup and dropoff carry an identity and name different places
/// - `passengers > 0`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pickup: Location,
    dropoff: Location,
    passengers: u32,
    pickup_at: Option<Timestamp>,
    currency: Option<Currency>,
}

impl SearchRequest {
    /// Creates a validated search request.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SameLocation` if pickup and dropoff share an
    /// identity, and `DomainError::InvalidPassengerCount` if `passengers` is
    /// zero.
    pub fn new(pickup: Location, dropoff: Location, passengers: u32) -> DomainResult<Self> {
        let request = Self::from_parts(pickup, dropoff, passengers, None, None);
        request.validate()?;
        Ok(request)
    }

    /// Assembles a request without validation.
    ///
    /// Callers that build requests this way must run [`SearchRequest::validate`]
    /// before dispatching; the orchestrator always does.
    #[must_use]
    pub fn from_parts(
        pickup: Location,
        dropoff: Location,
        passengers: u32,
        pickup_at: Option<Timestamp>,
        currency: Option<Currency>,
    ) -> Self {
        Self {
            pickup,
            dropoff,
            passengers,
            pickup_at,
            currency,
        }
    }

    /// Sets the requested pickup time.
    #[must_use]
    pub fn with_pickup_at(mut self, pickup_at: Timestamp) -> Self {
        self.pickup_at = Some(pickup_at);
        self
    }

    /// Sets the currency the caller would like prices in.
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Checks the request invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`DomainError`].
    pub fn validate(&self) -> DomainResult<()> {
        if !self.pickup.has_identity() {
            return Err(DomainError::InvalidLocation(
                "pickup location is missing".to_string(),
            ));
        }
        if !self.dropoff.has_identity() {
            return Err(DomainError::InvalidLocation(
                "dropoff location is missing".to_string(),
            ));
        }
        if self.pickup.same_place(&self.dropoff) {
            return Err(DomainError::SameLocation(self.pickup.id().to_string()));
        }
        if self.passengers == 0 {
            return Err(DomainError::InvalidPassengerCount(self.passengers));
        }
        Ok(())
    }

    /// Returns the pickup location.
    #[inline]
    #[must_use]
    pub fn pickup(&self) -> &Location {
        &self.pickup
    }

    /// Returns the dropoff location.
    #[inline]
    #[must_use]
    pub fn dropoff(&self) -> &Location {
        &self.dropoff
    }

    /// Returns the passenger count.
    #[inline]
    #[must_use]
    pub fn passengers(&self) -> u32 {
        self.passengers
    }

    /// Returns the requested pickup time, if any.
    #[inline]
    #[must_use]
    pub fn pickup_at(&self) -> Option<Timestamp> {
        self.pickup_at
    }

    /// Returns the preferred currency, if any.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> Option<&Currency> {
        self.currency.as_ref()
    }
}

impl fmt::Display for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SearchRequest({} -> {}, {} pax)",
            self.pickup.id(),
            self.dropoff.id(),
            self.passengers
        )
    }
}

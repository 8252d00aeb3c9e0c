//! # Offer Entity
//!
//! Normalized transfer offers.
//!
//! Adapters produce [`SupplierOffer`]s, the supplier-side normalized shape
//! that carries no provenance. The orchestrator turns each one into an
//! [`Offer`] stamped with the producing supplier's code and the search id,
//! so every offer traces back to exactly one supplier and one search.
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use transfer_search::domain::entities::{Offer, SupplierOffer};
//! use transfer_search::domain::value_objects::{
//!     Currency, Money, OfferId, SearchId, SupplierCode, Vehicle, VehicleCategory,
//! };
//!
//! let raw = SupplierOffer::new(
//!     OfferId::new("q-1"),
//!     Money::new(Decimal::new(40, 0), Currency::new("EUR").unwrap()).unwrap(),
//!     Vehicle::new(VehicleCategory::Sedan),
//!     3,
//!     "tok-abc",
//! );
//! assert!(raw.validate().is_ok());
//!
//! let offer = Offer::from_supplier(SearchId::new_v4(), SupplierCode::new("acme"), raw);
//! assert_eq!(offer.supplier_code().as_str(), "acme");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Money, OfferId, SearchId, SupplierCode, Vehicle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Supplier-specific key/value data attached to an offer.
///
/// Ordered so that serialized output is stable.
///
/// # Examples
///
/// ```
/// use transfer_search::domain::entities::OfferMetadata;
///
/// let mut metadata = OfferMetadata::new();
/// metadata.set("meet_and_greet", "true");
/// assert_eq!(metadata.get("meet_and_greet"), Some("true"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferMetadata {
    data: BTreeMap<String, String>,
}

impl OfferMetadata {
    /// Creates empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates metadata from a map.
    #[must_use]
    pub fn from_map(data: BTreeMap<String, String>) -> Self {
        Self { data }
    }

    /// Sets a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    /// Gets a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Returns true if there is no metadata.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.data.iter()
    }
}

/// An offer as normalized by its supplier adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierOffer {
    offer_id: OfferId,
    price: Money,
    vehicle: Vehicle,
    capacity: u32,
    booking_token: String,
    metadata: OfferMetadata,
}

impl SupplierOffer {
    /// Creates a supplier offer.
    #[must_use]
    pub fn new(
        offer_id: OfferId,
        price: Money,
        vehicle: Vehicle,
        capacity: u32,
        booking_token: impl Into<String>,
    ) -> Self {
        Self {
            offer_id,
            price,
            vehicle,
            capacity,
            booking_token: booking_token.into(),
            metadata: OfferMetadata::default(),
        }
    }

    /// Attaches supplier metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: OfferMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Checks that the offer is bookable.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidOffer` if the offer id or booking token is
    /// blank, the price is not positive, or the capacity is zero.
    pub fn validate(&self) -> DomainResult<()> {
        if self.offer_id.is_blank() {
            return Err(DomainError::InvalidOffer("offer id is blank".to_string()));
        }
        if !self.price.is_positive() {
            return Err(DomainError::InvalidOffer(format!(
                "offer {} has non-positive price {}",
                self.offer_id, self.price
            )));
        }
        if self.capacity == 0 {
            return Err(DomainError::InvalidOffer(format!(
                "offer {} has zero capacity",
                self.offer_id
            )));
        }
        if self.booking_token.trim().is_empty() {
            return Err(DomainError::InvalidOffer(format!(
                "offer {} has no booking token",
                self.offer_id
            )));
        }
        Ok(())
    }

    /// Returns the supplier-provided offer id.
    #[inline]
    #[must_use]
    pub fn offer_id(&self) -> &OfferId {
        &self.offer_id
    }

    /// Returns the price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> &Money {
        &self.price
    }
}

/// A normalized, bookable offer from one supplier for one search.
///
/// # Invariants
///
/// - `supplier_code` is the code of the adapter that produced it
/// - `search_id` is the search that dispatched that adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    search_id: SearchId,
    supplier_code: SupplierCode,
    offer_id: OfferId,
    price: Money,
    vehicle: Vehicle,
    capacity: u32,
    booking_token: String,
    metadata: OfferMetadata,
}

impl Offer {
    /// Stamps a supplier offer with its provenance.
    #[must_use]
    pub fn from_supplier(
        search_id: SearchId,
        supplier_code: SupplierCode,
        offer: SupplierOffer,
    ) -> Self {
        Self {
            search_id,
            supplier_code,
            offer_id: offer.offer_id,
            price: offer.price,
            vehicle: offer.vehicle,
            capacity: offer.capacity,
            booking_token: offer.booking_token,
            metadata: offer.metadata,
        }
    }

    /// Returns the search this offer belongs to.
    #[inline]
    #[must_use]
    pub fn search_id(&self) -> SearchId {
        self.search_id
    }

    /// Returns the producing supplier's code.
    #[inline]
    #[must_use]
    pub fn supplier_code(&self) -> &SupplierCode {
        &self.supplier_code
    }

    /// Returns the supplier-provided offer id.
    #[inline]
    #[must_use]
    pub fn offer_id(&self) -> &OfferId {
        &self.offer_id
    }

    /// Returns the price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> &Money {
        &self.price
    }

    /// Returns the vehicle descriptor.
    #[inline]
    #[must_use]
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Returns the passenger capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the opaque token the supplier needs to book this offer.
    #[inline]
    #[must_use]
    pub fn booking_token(&self) -> &str {
        &self.booking_token
    }

    /// Returns supplier metadata.
    #[inline]
    #[must_use]
    pub fn metadata(&self) -> &OfferMetadata {
        &self.metadata
    }

    /// Returns true if the vehicle seats at least `passengers`.
    #[must_use]
    pub fn seats(&self, passengers: u32) -> bool {
        self.capacity >= passengers
    }
}

impl fmt::Display for Offer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Offer({}/{} {} {} x{})",
            self.supplier_code, self.offer_id, self.price, self.vehicle, self.capacity
        )
    }
}

//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`SupplierCode`]: supplier identifier and correlation tag
//! - [`SearchId`]: UUID of one aggregate search
//! - [`OfferId`], [`LocationId`]: string identifiers
//!
//! ## Descriptors
//!
//! - [`Money`], [`Currency`]: offer prices
//! - [`Location`], [`Coordinates`]: pickup and dropoff places
//! - [`Vehicle`], [`VehicleCategory`]: what the offer drives you in
//! - [`FailureKind`]: why a supplier did not contribute
//! - [`Timestamp`]: UTC instants

pub mod failure_kind;
pub mod ids;
pub mod location;
pub mod money;
pub mod timestamp;
pub mod vehicle;

pub use failure_kind::FailureKind;
pub use ids::{LocationId, OfferId, SearchId, SupplierCode};
pub use location::{Coordinates, Location};
pub use money::{Currency, Money};
pub use timestamp::Timestamp;
pub use vehicle::{Vehicle, VehicleCategory};

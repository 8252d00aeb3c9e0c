//! # Domain Entities
//!
//! ## Request
//!
//! - [`SearchRequest`]: validated pickup/dropoff/passengers search
//!
//! ## Offers
//!
//! - [`SupplierOffer`]: adapter-normalized offer without provenance
//! - [`Offer`]: offer stamped with supplier code and search id
//!
//! ## Results
//!
//! - [`SupplierSearchOutcome`]: one supplier's terminal outcome
//! - [`SearchResult`], [`SearchSummary`]: the aggregate response

pub mod offer;
pub mod outcome;
pub mod search_request;
pub mod search_result;

pub use offer::{Offer, OfferMetadata, SupplierOffer};
pub use outcome::{SupplierFailure, SupplierSearchOutcome};
pub use search_request::SearchRequest;
pub use search_result::{SearchResult, SearchSummary};

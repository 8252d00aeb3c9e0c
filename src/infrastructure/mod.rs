//! # Infrastructure Layer
//!
//! Adapters to the outside world: supplier backends over HTTP.

pub mod suppliers;

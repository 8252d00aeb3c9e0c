//! # Domain Layer
//!
//! Transfer search vocabulary: value objects, entities and validation errors.
//! Nothing in here performs I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

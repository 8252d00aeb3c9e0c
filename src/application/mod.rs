//! # Application Layer
//!
//! Use-case orchestration on top of the domain model and supplier adapters.
//!
//! - [`services`]: registry, search orchestrator and result assembler
//! - [`error`]: errors returned to the API layer

pub mod error;
pub mod services;

//! # Transfer Search
//!
//! Aggregates ground-transfer offers from independent supplier backends
//! into one ranked, deduplicated search result.
//!
//! # Architecture
//!
//! - [`domain`]: value objects and entities (requests, offers, outcomes)
//! - [`application`]: supplier registry, search orchestrator, result assembler
//! - [`infrastructure`]: supplier adapter port and the HTTP adapter
//! - [`api`]: REST surface
//! - [`config`]: layered settings
//! - [`telemetry`]: tracing subscriber setup
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use transfer_search::application::services::{
//!     OrchestratorConfig, SearchOrchestrator, SupplierRegistry,
//! };
//! use transfer_search::domain::entities::SearchRequest;
//! use transfer_search::domain::value_objects::Location;
//! use transfer_search::infrastructure::suppliers::{InMemorySupplier, TransferSupplier};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let suppliers: Vec<Arc<dyn TransferSupplier>> =
//!     vec![Arc::new(InMemorySupplier::with_offers("demo", vec![]))];
//! let registry = Arc::new(SupplierRegistry::new(suppliers));
//! let orchestrator = SearchOrchestrator::new(registry, OrchestratorConfig::default());
//!
//! let request = SearchRequest::new(Location::new("LHR")?, Location::new("LGW")?, 2)?;
//! let result = orchestrator.search(&request).await?;
//! println!("{} offers", result.offers().len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

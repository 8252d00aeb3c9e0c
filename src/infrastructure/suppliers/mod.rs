//! # Supplier Integrations
//!
//! Ports and adapters for transfer suppliers.
//!
//! - [`TransferSupplier`]: the adapter port every backend implements
//! - [`SupplierError`]: adapter failures, classified by [`FailureKind`](crate::domain::value_objects::FailureKind)
//! - [`HttpSupplierAdapter`]: configuration-driven JSON-over-HTTP adapter
//! - [`InMemorySupplier`]: scripted adapter for tests and local runs
//! - [`SupplierSwitchboard`]: live enabled flags owned by configuration

pub mod error;
pub mod http_adapter;
pub mod http_client;
pub mod in_memory;
pub mod switch;
pub mod traits;

pub use error::{SupplierError, SupplierResult};
pub use http_adapter::{HttpSupplierAdapter, HttpSupplierConfig};
pub use in_memory::{InMemorySupplier, ScriptedResponse};
pub use switch::{SupplierSwitch, SupplierSwitchboard};
pub use traits::{SearchContext, TransferSupplier};

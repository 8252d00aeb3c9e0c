//! # Application Services
//!
//! The search core: supplier registry, orchestrator and result assembler.

pub mod result_assembler;
pub mod search_orchestrator;
pub mod supplier_registry;

pub use result_assembler::ResultAssembler;
pub use search_orchestrator::{OrchestratorConfig, SearchOrchestrator};
pub use supplier_registry::SupplierRegistry;

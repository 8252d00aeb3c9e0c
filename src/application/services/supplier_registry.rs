//! # Supplier Registry
//!
//! Holds every configured supplier adapter for the process lifetime.
//!
//! The registry is built once and never mutated afterwards. It keeps three
//! views of the same adapters:
//!
//! - a `HashMap` keyed by [`SupplierCode`] for lookup
//! - every registration, in order, for enumeration
//! - the first registration of each code, in order, for dispatch
//!
//! Duplicate codes are resolved at construction: the first adapter wins
//! lookups and searches, the collision is logged, and the duplicate still
//! shows up in [`SupplierRegistry::all_suppliers`]. Enabled state is read
//! live from each adapter on every call, so flipping a supplier's switch
//! takes effect on the next search without rebuilding the registry.

use crate::domain::value_objects::SupplierCode;
use crate::infrastructure::suppliers::TransferSupplier;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

/// Read-only registry of supplier adapters.
#[derive(Debug, Clone, Default)]
pub struct SupplierRegistry {
    by_code: HashMap<SupplierCode, Arc<dyn TransferSupplier>>,
    registered: Vec<Arc<dyn TransferSupplier>>,
    searchable: Vec<Arc<dyn TransferSupplier>>,
}

impl SupplierRegistry {
    /// Registers `suppliers`; the first adapter of each code wins.
    pub fn new(suppliers: impl IntoIterator<Item = Arc<dyn TransferSupplier>>) -> Self {
        let mut by_code = HashMap::new();
        let mut registered = Vec::new();
        let mut searchable = Vec::new();

        for supplier in suppliers {
            match by_code.entry(supplier.code().clone()) {
                Entry::Occupied(_) => {
                    tracing::warn!(
                        supplier = %supplier.code(),
                        "duplicate supplier code, keeping first registration"
                    );
                }
                Entry::Vacant(slot) => {
                    slot.insert(Arc::clone(&supplier));
                    searchable.push(Arc::clone(&supplier));
                }
            }
            registered.push(supplier);
        }

        tracing::debug!(
            suppliers = registered.len(),
            distinct = searchable.len(),
            "supplier registry built"
        );
        Self {
            by_code,
            registered,
            searchable,
        }
    }

    /// Returns every registration in order, duplicates included.
    #[must_use]
    pub fn all_suppliers(&self) -> Vec<Arc<dyn TransferSupplier>> {
        self.registered.clone()
    }

    /// Returns the currently enabled suppliers in registration order.
    ///
    /// Only the first registration of a code is ever returned, so a
    /// duplicated code is searched once.
    #[must_use]
    pub fn enabled_suppliers(&self) -> Vec<Arc<dyn TransferSupplier>> {
        self.searchable
            .iter()
            .filter(|supplier| supplier.is_enabled())
            .cloned()
            .collect()
    }

    /// Returns the supplier for `code` if it is registered and enabled.
    #[must_use]
    pub fn get_supplier(&self, code: &SupplierCode) -> Option<Arc<dyn TransferSupplier>> {
        self.by_code
            .get(code)
            .filter(|supplier| supplier.is_enabled())
            .cloned()
    }

    /// Returns the number of registrations, duplicates included.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    /// Returns true if no supplier is registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    /// Returns the number of suppliers a search would dispatch to now.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.searchable.iter().filter(|s| s.is_enabled()).count()
    }
}

//! # Supplier Switches
//!
//! Live enabled flags for suppliers.
//!
//! A [`SupplierSwitch`] is a shared atomic flag. The configuration layer
//! builds a [`SupplierSwitchboard`] with one switch per configured supplier,
//! hands each adapter its switch, and keeps the board so the flag can be
//! flipped at runtime without touching the registry.
//!
//! # Examples
//!
//! ```
//! use transfer_search::domain::value_objects::SupplierCode;
//! use transfer_search::infrastructure::suppliers::SupplierSwitchboard;
//!
//! let board = SupplierSwitchboard::from_flags([(SupplierCode::new("acme"), true)]);
//! let switch = board.switch(&SupplierCode::new("acme")).unwrap();
//!
//! board.set_enabled(&SupplierCode::new("acme"), false);
//! assert!(!switch.is_enabled());
//! ```

use crate::domain::value_objects::SupplierCode;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared, atomically updated enabled flag.
#[derive(Debug, Clone)]
pub struct SupplierSwitch(Arc<AtomicBool>);

impl SupplierSwitch {
    /// Creates a switch in the given state.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    /// Returns the current state.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Sets the state and returns the previous one.
    pub fn set(&self, enabled: bool) -> bool {
        self.0.swap(enabled, Ordering::AcqRel)
    }
}

impl Default for SupplierSwitch {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Immutable map of supplier codes to their switches.
///
/// The first flag given for a code wins, mirroring the registry.
#[derive(Debug, Clone, Default)]
pub struct SupplierSwitchboard {
    switches: HashMap<SupplierCode, SupplierSwitch>,
}

impl SupplierSwitchboard {
    /// Builds a board from `(code, enabled)` pairs.
    pub fn from_flags(flags: impl IntoIterator<Item = (SupplierCode, bool)>) -> Self {
        Self::from_switches(
            flags
                .into_iter()
                .map(|(code, enabled)| (code, SupplierSwitch::new(enabled))),
        )
    }

    /// Builds a board from existing switches.
    pub fn from_switches(switches: impl IntoIterator<Item = (SupplierCode, SupplierSwitch)>) -> Self {
        let mut board = HashMap::new();
        for (code, switch) in switches {
            board.entry(code).or_insert(switch);
        }
        Self { switches: board }
    }

    /// Returns a handle to the switch of `code`.
    #[must_use]
    pub fn switch(&self, code: &SupplierCode) -> Option<SupplierSwitch> {
        self.switches.get(code).cloned()
    }

    /// Flips the switch of `code`.
    ///
    /// Returns the previous state, or `None` if no switch exists for `code`.
    pub fn set_enabled(&self, code: &SupplierCode, enabled: bool) -> Option<bool> {
        let previous = self.switches.get(code).map(|switch| switch.set(enabled));
        if let Some(previous) = previous {
            if previous != enabled {
                tracing::info!(supplier = %code, enabled, "supplier switch changed");
            }
        }
        previous
    }

    /// Returns the number of switches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.switches.len()
    }

    /// Returns true if the board has no switches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn switch_clones_share_state() {
        let switch = SupplierSwitch::new(true);
        let handle = switch.clone();
        assert!(switch.set(false));
        assert!(!handle.is_enabled());
    }

    #[test]
    fn first_flag_wins() {
        let code = SupplierCode::new("dup");
        let board = SupplierSwitchboard::from_flags([(code.clone(), false), (code.clone(), true)]);
        assert_eq!(board.len(), 1);
        assert!(!board.switch(&code).unwrap().is_enabled());
    }

    #[test]
    fn set_enabled_unknown_code() {
        let board = SupplierSwitchboard::default();
        assert!(board.is_empty());
        assert_eq!(board.set_enabled(&SupplierCode::new("ghost"), true), None);
    }

    #[test]
    fn set_enabled_returns_previous() {
        let code = SupplierCode::new("acme");
        let board = SupplierSwitchboard::from_flags([(code.clone(), true)]);
        assert_eq!(board.set_enabled(&code, false), Some(true));
        assert_eq!(board.set_enabled(&code, false), Some(false));
    }
}

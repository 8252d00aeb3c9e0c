//! # Configuration
//!
//! Layered service settings. See [`settings`] for the source order.

pub mod settings;

pub use settings::{
    ConfigError, LogFormat, LoggingSettings, SearchSettings, ServerSettings, Settings,
    SettingsLoader, SupplierSettings,
};

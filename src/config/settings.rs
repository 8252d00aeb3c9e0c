//! # Settings
//!
//! Service configuration, layered with the `config` crate.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. `config/default.{toml,yaml,json}` (optional)
//! 3. `config/{APP_ENV}.{toml,yaml,json}` (optional)
//! 4. Environment variables prefixed `TRANSFER__`, nested keys separated by
//!    `__` (e.g. `TRANSFER__SEARCH__OVERALL_TIMEOUT_MS=3000`)

use crate::application::services::OrchestratorConfig;
use crate::domain::value_objects::SupplierCode;
use crate::infrastructure::suppliers::{HttpSupplierConfig, SupplierSwitchboard};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "TRANSFER";

/// Environment variable naming the deployment environment file.
pub const APP_ENV_VAR: &str = "APP_ENV";

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// The merged configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Main application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP server.
    pub server: ServerSettings,
    /// Search orchestration.
    pub search: SearchSettings,
    /// Logging.
    pub logging: LoggingSettings,
    /// Configured suppliers, in registration order.
    pub suppliers: Vec<SupplierSettings>,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Search orchestration settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Overall search deadline in milliseconds.
    pub overall_timeout_ms: u64,
    /// Default per-supplier timeout in milliseconds.
    pub per_supplier_timeout_ms: u64,
    /// Maximum offers per result; unset means unlimited.
    pub max_offers: Option<usize>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        let defaults = OrchestratorConfig::default();
        Self {
            overall_timeout_ms: defaults.overall_timeout_ms,
            per_supplier_timeout_ms: defaults.per_supplier_timeout_ms,
            max_offers: defaults.max_offers,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Multi-line human readable output.
    Pretty,
    /// Single-line human readable output.
    #[default]
    Compact,
}

/// One configured HTTP supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierSettings {
    /// Supplier code.
    pub code: String,
    /// Initial enabled flag.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Base URL of the supplier API.
    pub base_url: String,
    /// Per-call timeout override in milliseconds.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    /// Bearer token.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl SupplierSettings {
    /// Converts to the adapter's connection config.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the code is blank or malformed.
    pub fn to_http_config(&self) -> Result<HttpSupplierConfig, ConfigError> {
        let code = SupplierCode::parse(&self.code).map_err(|e| ConfigError::invalid(e.to_string()))?;
        let mut config = HttpSupplierConfig::new(code, self.base_url.clone());
        if let Some(timeout_ms) = self.timeout_ms {
            config = config.with_timeout_ms(timeout_ms);
        }
        if let Some(api_key) = &self.api_key {
            config = config.with_api_key(api_key.clone());
        }
        Ok(config)
    }
}

impl Settings {
    /// Loads settings from `./config` and the process environment.
    ///
    /// A `.env` file in the working directory is read first, if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a source is unreadable or does not
    /// deserialize, and `ConfigError::Invalid` if validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env file");
        }
        SettingsLoader::new()
            .app_env(std::env::var(APP_ENV_VAR).ok())
            .load()
    }

    /// Returns the `host:port` bind address.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Returns the orchestrator configuration.
    #[must_use]
    pub fn orchestrator_config(&self) -> OrchestratorConfig {
        let config = OrchestratorConfig::with_timeout(self.search.overall_timeout_ms)
            .with_per_supplier_timeout(self.search.per_supplier_timeout_ms);
        match self.search.max_offers {
            Some(max) => config.with_max_offers(max),
            None => config,
        }
    }

    /// Builds the live enabled flags of all configured suppliers.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a supplier code is malformed.
    pub fn switchboard(&self) -> Result<SupplierSwitchboard, ConfigError> {
        let flags = self
            .suppliers
            .iter()
            .map(|s| {
                SupplierCode::parse(&s.code)
                    .map(|code| (code, s.enabled))
                    .map_err(|e| ConfigError::invalid(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SupplierSwitchboard::from_flags(flags))
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for zero timeouts, a per-supplier
    /// timeout above the overall timeout, or a blank supplier code or URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let search = &self.search;
        if search.overall_timeout_ms == 0 {
            return Err(ConfigError::invalid("search.overall_timeout_ms must be positive"));
        }
        if search.per_supplier_timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "search.per_supplier_timeout_ms must be positive",
            ));
        }
        if search.per_supplier_timeout_ms > search.overall_timeout_ms {
            return Err(ConfigError::invalid(format!(
                "search.per_supplier_timeout_ms ({}) exceeds search.overall_timeout_ms ({})",
                search.per_supplier_timeout_ms, search.overall_timeout_ms
            )));
        }

        for supplier in &self.suppliers {
            SupplierCode::parse(&supplier.code)
                .map_err(|e| ConfigError::invalid(format!("suppliers: {e}")))?;
            if supplier.base_url.trim().is_empty() {
                return Err(ConfigError::invalid(format!(
                    "supplier {} has no base_url",
                    supplier.code
                )));
            }
            if supplier.timeout_ms == Some(0) {
                return Err(ConfigError::invalid(format!(
                    "supplier {} has a zero timeout_ms",
                    supplier.code
                )));
            }
        }
        Ok(())
    }
}

/// Builder for the layered settings sources.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    config_dir: PathBuf,
    app_env: Option<String>,
    env_source: Option<::config::Map<String, String>>,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsLoader {
    /// Creates a loader reading `./config` and the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: PathBuf::from("config"),
            app_env: None,
            env_source: None,
        }
    }

    /// Sets the directory holding `default` and per-environment files.
    #[must_use]
    pub fn config_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Sets the deployment environment whose file overlays `default`.
    #[must_use]
    pub fn app_env(mut self, app_env: Option<String>) -> Self {
        self.app_env = app_env;
        self
    }

    /// Reads environment overrides from `vars` instead of the process.
    #[must_use]
    pub fn env_vars(mut self, vars: ::config::Map<String, String>) -> Self {
        self.env_source = Some(vars);
        self
    }

    /// Merges all sources and validates the result.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a source is unreadable or does not
    /// deserialize, and `ConfigError::Invalid` if validation fails.
    pub fn load(self) -> Result<Settings, ConfigError> {
        let mut builder = ::config::Config::builder().add_source(
            ::config::File::from(self.config_dir.join("default")).required(false),
        );
        if let Some(app_env) = &self.app_env {
            builder = builder
                .add_source(::config::File::from(self.config_dir.join(app_env)).required(false));
        }
        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(self.env_source),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}

//! # Telemetry
//!
//! Global `tracing` subscriber setup.

use crate::config::{LogFormat, LoggingSettings};
use tracing_subscriber::EnvFilter;

/// Error returned when a global subscriber is already installed.
pub type TelemetryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `settings.level`.
///
/// # Errors
///
/// Returns an error if the level directive is invalid or a global
/// subscriber has already been set.
pub fn init_tracing(settings: &LoggingSettings) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    match settings.format {
        LogFormat::Json => builder.json().try_init()?,
        LogFormat::Pretty => builder.pretty().try_init()?,
        LogFormat::Compact => builder.compact().try_init()?,
    }

    tracing::info!(
        level = %settings.level,
        format = ?settings.format,
        "logging initialised"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails() {
        let settings = LoggingSettings {
            level: "info".to_string(),
            format: LogFormat::Compact,
        };
        // whichever test installs the subscriber first, a second install fails
        let _ = init_tracing(&settings);
        assert!(init_tracing(&settings).is_err());
    }
}

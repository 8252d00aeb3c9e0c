//! # Timestamp Value Object
//!
//! UTC instant used for requested pickup times and result creation times.
//! Always crosses the wire as RFC 3339.
//!
//! ```
//! use transfer_search::domain::value_objects::Timestamp;
//!
//! let pickup = Timestamp::parse_rfc3339("2025-03-01T09:30:00+01:00").unwrap();
//! assert_eq!(pickup.to_rfc3339(), "2025-03-01T08:30:00+00:00");
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Parses an RFC 3339 string, normalizing the offset to UTC.
    ///
    /// Returns `None` if the string is not valid RFC 3339.
    #[must_use]
    pub fn parse_rfc3339(value: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|parsed| Self(parsed.with_timezone(&Utc)))
    }

    /// Shifts by whole hours (may be negative).
    #[must_use]
    pub fn add_hours(&self, hours: i64) -> Self {
        Self(self.0 + Duration::hours(hours))
    }

    /// RFC 3339 rendering with a `+00:00` offset.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_to_utc() {
        let ts = Timestamp::parse_rfc3339("2024-06-01T12:00:00+02:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-06-01T10:00:00+00:00");
        assert_eq!(ts.to_string(), ts.to_rfc3339());
    }

    #[test]
    fn parse_rejects_free_text() {
        assert!(Timestamp::parse_rfc3339("tomorrow").is_none());
        assert!(Timestamp::parse_rfc3339("2024-06-01").is_none());
    }

    #[test]
    fn add_hours_orders() {
        let now = Timestamp::now();
        assert!(now.add_hours(2) > now);
        assert!(now.add_hours(-2) < now);
    }

    #[test]
    fn serde_is_rfc3339_string() {
        let ts = Timestamp::parse_rfc3339("2024-01-01T00:00:00Z").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2024-01-01T00:00:00Z\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}

//! # Vehicle
//!
//! Vehicle descriptors carried on offers.
//!
//! [`VehicleCategory`] implements `Display`, `FromStr` and Serde using the
//! same snake_case names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Broad vehicle class of a transfer offer.
///
/// Unknown supplier categories deserialize to [`VehicleCategory::Other`].
///
/// # Examples
///
/// ```
/// use transfer_search::domain::value_objects::VehicleCategory;
///
/// let category: VehicleCategory = "minibus".parse().unwrap();
/// assert_eq!(category, VehicleCategory::Minibus);
/// assert_eq!(category.to_string(), "minibus");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    /// Standard car.
    Sedan,
    /// Estate or SUV with extra luggage room.
    Estate,
    /// People carrier, typically up to 8 seats.
    Van,
    /// Minibus, typically up to 16 seats.
    Minibus,
    /// Coach.
    Bus,
    /// Shared shuttle seat.
    Shuttle,
    /// Premium or executive car.
    Luxury,
    /// Anything the supplier does not classify.
    #[default]
    #[serde(other)]
    Other,
}

impl VehicleCategory {
    /// Returns true if the category is a shared ride.
    #[inline]
    #[must_use]
    pub const fn is_shared(&self) -> bool {
        matches!(self, Self::Shuttle | Self::Bus)
    }

    const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedan => "sedan",
            Self::Estate => "estate",
            Self::Van => "van",
            Self::Minibus => "minibus",
            Self::Bus => "bus",
            Self::Shuttle => "shuttle",
            Self::Luxury => "luxury",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let category = match s.trim().to_ascii_lowercase().as_str() {
            "sedan" | "car" | "standard" => Self::Sedan,
            "estate" | "suv" => Self::Estate,
            "van" | "mpv" => Self::Van,
            "minibus" => Self::Minibus,
            "bus" | "coach" => Self::Bus,
            "shuttle" | "shared" => Self::Shuttle,
            "luxury" | "executive" | "premium" => Self::Luxury,
            _ => Self::Other,
        };
        Ok(category)
    }
}

/// Vehicle descriptor of one offer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    category: VehicleCategory,
    description: Option<String>,
}

impl Vehicle {
    /// Creates a vehicle descriptor.
    #[must_use]
    pub fn new(category: VehicleCategory) -> Self {
        Self {
            category,
            description: None,
        }
    }

    /// Sets the supplier's free-text description ("Mercedes E-Class or similar").
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the category.
    #[inline]
    #[must_use]
    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    /// Returns the description, if any.
    #[inline]
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{} ({})", self.category, description),
            None => write!(f, "{}", self.category),
        }
    }
}

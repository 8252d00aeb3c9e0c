//! # Location
//!
//! Pickup and dropoff places.
//!
//! A [`Location`] is identified by its [`LocationId`]; the optional name and
//! coordinates are descriptive and forwarded to suppliers as-is.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::ids::LocationId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Creates coordinates.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLocation` if latitude is outside
    /// `[-90, 90]` or longitude outside `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> DomainResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::InvalidLocation(format!(
                "latitude out of range: {latitude}"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidLocation(format!(
                "longitude out of range: {longitude}"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Returns the latitude.
    #[inline]
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude.
    #[inline]
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// A pickup or dropoff place.
///
/// # Examples
///
/// ```
/// use transfer_search::domain::value_objects::Location;
///
/// let airport = Location::new("LHR").unwrap().with_name("Heathrow Airport");
/// assert_eq!(airport.id().as_str(), "LHR");
/// assert!(airport.same_place(&Location::new("lhr").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: LocationId,
    name: Option<String>,
    coordinates: Option<Coordinates>,
}

impl Location {
    /// Creates a location from its identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLocation` if the identifier is blank.
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidLocation(
                "location id must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id: LocationId::new(id.trim()),
            name: None,
            coordinates: None,
        })
    }

    /// Sets a human-readable name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the coordinates.
    #[must_use]
    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Returns the identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &LocationId {
        &self.id
    }

    /// Returns the name, if any.
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the coordinates, if any.
    #[inline]
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Returns true if both locations share an identity.
    #[must_use]
    pub fn same_place(&self, other: &Self) -> bool {
        self.id.same_place(&other.id)
    }

    /// Returns true if the identifier is usable.
    #[must_use]
    pub fn has_identity(&self) -> bool {
        !self.id.as_str().trim().is_empty()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({})", name, self.id),
            None => write!(f, "{}", self.id),
        }
    }
}

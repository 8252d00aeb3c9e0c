//! # HTTP Supplier Adapter
//!
//! Generic JSON-over-HTTP supplier integration.
//!
//! Suppliers that speak the aggregator's reference protocol are integrated
//! purely through configuration: one [`HttpSupplierAdapter`] per configured
//! supplier, each POSTing to `{base_url}/search`.
//!
//! ## Wire Format
//!
//! Request body:
//!
//! ```text
//! { "searchId": "...", "pickup": {"id": "LHR", "name": "...", "latitude": 51.4, "longitude": -0.4},
//!   "dropoff": {...}, "passengers": 3, "pickupAt": "2024-06-01T10:00:00Z", "currency": "GBP" }
//! ```
//!
//! Response body, either offers:
//!
//! ```text
//! { "offers": [ { "id": "q1", "price": {"amount": "42.50", "currency": "GBP"},
//!                 "vehicle": {"category": "sedan", "description": "..."},
//!                 "capacity": 3, "bookingToken": "...", "metadata": {"k": "v"} } ] }
//! ```
//!
//! or a business error (`NO_AVAILABILITY` maps to no availability, any other
//! code to a generic rejection):
//!
//! ```text
//! { "error": { "code": "NO_AVAILABILITY", "message": "fully booked" } }
//! ```

use crate::domain::entities::{OfferMetadata, SearchRequest, SupplierOffer};
use crate::domain::value_objects::{
    Currency, Location, Money, OfferId, SearchId, SupplierCode, Vehicle, VehicleCategory,
};
use crate::infrastructure::suppliers::error::{SupplierError, SupplierResult};
use crate::infrastructure::suppliers::http_client::HttpClient;
use crate::infrastructure::suppliers::switch::SupplierSwitch;
use crate::infrastructure::suppliers::traits::{SearchContext, TransferSupplier};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Backstop timeout of the underlying client; real requests use the
/// remaining time of the dispatch deadline.
const CLIENT_TIMEOUT_MS: u64 = 30_000;

/// Business error code meaning "no vehicles for this request".
const NO_AVAILABILITY_CODE: &str = "NO_AVAILABILITY";

/// Connection settings of one HTTP supplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSupplierConfig {
    /// Supplier code.
    pub code: SupplierCode,
    /// Base URL; `/search` is appended.
    pub base_url: String,
    /// Per-call timeout override in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Bearer token sent in the `Authorization` header.
    pub api_key: Option<String>,
}

impl HttpSupplierConfig {
    /// Creates a config without timeout override or credentials.
    #[must_use]
    pub fn new(code: SupplierCode, base_url: impl Into<String>) -> Self {
        Self {
            code,
            base_url: base_url.into(),
            timeout_ms: None,
            api_key: None,
        }
    }

    /// Sets the per-call timeout override.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Sets the bearer token.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }
}

/// Supplier adapter speaking the reference JSON protocol.
#[derive(Debug, Clone)]
pub struct HttpSupplierAdapter {
    code: SupplierCode,
    search_url: String,
    timeout: Option<Duration>,
    client: HttpClient,
    switch: SupplierSwitch,
}

impl HttpSupplierAdapter {
    /// Creates an adapter whose enabled state follows `switch`.
    ///
    /// # Errors
    ///
    /// Returns `SupplierError::InternalError` if the API key is not a valid
    /// header value or the HTTP client cannot be built.
    pub fn new(config: HttpSupplierConfig, switch: SupplierSwitch) -> SupplierResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = &config.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e| {
                SupplierError::internal_error(format!("invalid API key for {}: {}", config.code, e))
            })?;
            headers.insert(AUTHORIZATION, value);
        }
        let client = HttpClient::with_headers(CLIENT_TIMEOUT_MS, headers)?;

        Ok(Self {
            search_url: config.search_url(),
            timeout: config.timeout_ms.map(Duration::from_millis),
            code: config.code,
            client,
            switch,
        })
    }

    /// Returns the URL searches are POSTed to.
    #[must_use]
    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

#[async_trait]
impl TransferSupplier for HttpSupplierAdapter {
    fn code(&self) -> &SupplierCode {
        &self.code
    }

    fn is_enabled(&self) -> bool {
        self.switch.is_enabled()
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    async fn search(
        &self,
        request: &SearchRequest,
        context: &SearchContext,
    ) -> SupplierResult<Vec<SupplierOffer>> {
        let body = SearchBody::new(request, context.search_id());
        let response: SearchResponseBody = self
            .client
            .post(&self.search_url, &body, Some(context.remaining()))
            .await?;

        if let Some(error) = response.error {
            return Err(error.into_supplier_error());
        }

        response
            .offers
            .into_iter()
            .map(WireOffer::into_supplier_offer)
            .collect()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchBody<'a> {
    search_id: SearchId,
    pickup: LocationBody<'a>,
    dropoff: LocationBody<'a>,
    passengers: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pickup_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<&'a str>,
}

impl<'a> SearchBody<'a> {
    fn new(request: &'a SearchRequest, search_id: SearchId) -> Self {
        Self {
            search_id,
            pickup: LocationBody::from(request.pickup()),
            dropoff: LocationBody::from(request.dropoff()),
            passengers: request.passengers(),
            pickup_at: request.pickup_at().map(|ts| ts.to_rfc3339()),
            currency: request.currency().map(Currency::as_str),
        }
    }
}

#[derive(Debug, Serialize)]
struct LocationBody<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    longitude: Option<f64>,
}

impl<'a> From<&'a Location> for LocationBody<'a> {
    fn from(location: &'a Location) -> Self {
        let coordinates = location.coordinates();
        Self {
            id: location.id().as_str(),
            name: location.name(),
            latitude: coordinates.map(|c| c.latitude()),
            longitude: coordinates.map(|c| c.longitude()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponseBody {
    #[serde(default)]
    offers: Vec<WireOffer>,
    #[serde(default)]
    error: Option<WireError>,
}

#[derive(Debug, Deserialize)]
struct WireError {
    code: String,
    #[serde(default)]
    message: String,
}

impl WireError {
    fn into_supplier_error(self) -> SupplierError {
        if self.code.eq_ignore_ascii_case(NO_AVAILABILITY_CODE) {
            SupplierError::no_availability(self.message)
        } else {
            SupplierError::rejected(self.message, Some(self.code))
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireOffer {
    id: String,
    price: WirePrice,
    vehicle: WireVehicle,
    capacity: u32,
    booking_token: String,
    #[serde(default)]
    metadata: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct WirePrice {
    amount: Decimal,
    currency: String,
}

#[derive(Debug, Deserialize)]
struct WireVehicle {
    category: String,
    #[serde(default)]
    description: Option<String>,
}

impl WireOffer {
    fn into_supplier_offer(self) -> SupplierResult<SupplierOffer> {
        let currency = Currency::new(&self.price.currency)
            .map_err(|e| SupplierError::protocol_error(format!("offer {}: {}", self.id, e)))?;
        let price = Money::new(self.price.amount, currency)
            .map_err(|e| SupplierError::protocol_error(format!("offer {}: {}", self.id, e)))?;

        let category = self
            .vehicle
            .category
            .parse::<VehicleCategory>()
            .unwrap_or_default();
        let mut vehicle = Vehicle::new(category);
        if let Some(description) = self.vehicle.description {
            vehicle = vehicle.with_description(description);
        }

        Ok(SupplierOffer::new(
            OfferId::new(self.id),
            price,
            vehicle,
            self.capacity,
            self.booking_token,
        )
        .with_metadata(OfferMetadata::from_map(self.metadata)))
    }
}

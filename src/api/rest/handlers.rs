//! # REST Handlers
//!
//! Request handlers, DTOs and error mapping for the REST API.

use crate::application::error::ApplicationError;
use crate::application::services::{SearchOrchestrator, SupplierRegistry};
use crate::domain::entities::{Offer, OfferMetadata, SearchRequest, SearchResult, SupplierFailure};
use crate::domain::value_objects::{
    Coordinates, Currency, FailureKind, Location, SupplierCode, Timestamp, VehicleCategory,
};
use crate::infrastructure::suppliers::SupplierSwitchboard;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state of the REST API.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search orchestrator.
    pub orchestrator: Arc<SearchOrchestrator>,
    /// Registered suppliers.
    pub registry: Arc<SupplierRegistry>,
    /// Live enabled flags.
    pub switchboard: SupplierSwitchboard,
}

impl AppState {
    /// Creates the state; the registry is taken from the orchestrator.
    #[must_use]
    pub fn new(orchestrator: Arc<SearchOrchestrator>, switchboard: SupplierSwitchboard) -> Self {
        Self {
            registry: Arc::clone(orchestrator.registry()),
            orchestrator,
            switchboard,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine readable error code.
    pub error: String,
    /// Human readable message.
    pub message: String,
}

/// Application error rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError(ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            ApplicationError::Domain(_) | ApplicationError::Validation(_) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            ApplicationError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        };
        tracing::debug!(%status, error = %self.0, "request rejected");

        let body = ErrorResponse {
            error: code.to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Unwraps a JSON body, turning every extractor rejection into a `400`.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApplicationError::validation(rejection.body_text()).into())
}

// ============================================================================
// Search
// ============================================================================

/// Location in a search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDto {
    /// Location identifier (IATA code, place id, ...).
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Latitude in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl LocationDto {
    fn into_domain(self, field: &str) -> Result<Location, ApplicationError> {
        let mut location = Location::new(self.id)
            .map_err(|e| ApplicationError::validation(format!("{field}: {e}")))?;
        if let Some(name) = self.name {
            location = location.with_name(name);
        }
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => {
                let coordinates = Coordinates::new(latitude, longitude)
                    .map_err(|e| ApplicationError::validation(format!("{field}: {e}")))?;
                location = location.with_coordinates(coordinates);
            }
            (None, None) => {}
            _ => {
                return Err(ApplicationError::validation(format!(
                    "{field}: latitude and longitude must be given together"
                )));
            }
        }
        Ok(location)
    }
}

/// Body of `POST /api/v1/transfers/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequestDto {
    /// Pickup location.
    pub pickup: LocationDto,
    /// Dropoff location.
    pub dropoff: LocationDto,
    /// Number of passengers.
    pub passengers: u32,
    /// Pickup time, RFC 3339.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_at: Option<String>,
    /// Preferred currency, ISO 4217.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl SearchRequestDto {
    /// Converts to a domain request.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` for malformed locations,
    /// timestamps or currencies.
    pub fn into_domain(self) -> Result<SearchRequest, ApplicationError> {
        let pickup = self.pickup.into_domain("pickup")?;
        let dropoff = self.dropoff.into_domain("dropoff")?;

        let pickup_at = self
            .pickup_at
            .map(|value| {
                Timestamp::parse_rfc3339(&value).ok_or_else(|| {
                    ApplicationError::validation(format!("pickupAt is not RFC 3339: {value}"))
                })
            })
            .transpose()?;
        let currency = self
            .currency
            .map(|code| Currency::new(&code))
            .transpose()
            .map_err(|e| ApplicationError::validation(e.to_string()))?;

        Ok(SearchRequest::from_parts(
            pickup,
            dropoff,
            self.passengers,
            pickup_at,
            currency,
        ))
    }
}

/// Price of an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceResponse {
    /// Decimal amount.
    pub amount: Decimal,
    /// ISO 4217 currency.
    pub currency: String,
}

/// Vehicle of an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleResponse {
    /// Vehicle category.
    pub category: VehicleCategory,
    /// Supplier description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One offer in a search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferResponse {
    /// Supplier code.
    pub supplier: String,
    /// Supplier offer id.
    pub offer_id: String,
    /// Price.
    pub price: PriceResponse,
    /// Vehicle.
    pub vehicle: VehicleResponse,
    /// Passenger capacity.
    pub capacity: u32,
    /// Token needed to book the offer.
    pub booking_token: String,
    /// Supplier metadata.
    #[serde(default, skip_serializing_if = "OfferMetadata::is_empty")]
    pub metadata: OfferMetadata,
}

impl From<&Offer> for OfferResponse {
    fn from(offer: &Offer) -> Self {
        Self {
            supplier: offer.supplier_code().to_string(),
            offer_id: offer.offer_id().to_string(),
            price: PriceResponse {
                amount: offer.price().amount(),
                currency: offer.price().currency().as_str().to_string(),
            },
            vehicle: VehicleResponse {
                category: offer.vehicle().category(),
                description: offer.vehicle().description().map(str::to_string),
            },
            capacity: offer.capacity(),
            booking_token: offer.booking_token().to_string(),
            metadata: offer.metadata().clone(),
        }
    }
}

/// One failed supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureResponse {
    /// Supplier code.
    pub supplier: String,
    /// Failure kind.
    pub kind: FailureKind,
    /// Failure detail.
    pub message: String,
}

impl From<&SupplierFailure> for FailureResponse {
    fn from(failure: &SupplierFailure) -> Self {
        Self {
            supplier: failure.supplier().to_string(),
            kind: failure.kind(),
            message: failure.message().to_string(),
        }
    }
}

/// Which suppliers answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierSummaryResponse {
    /// Number of suppliers dispatched.
    pub queried: usize,
    /// Suppliers that answered.
    pub succeeded: Vec<String>,
    /// Suppliers that failed.
    pub failed: Vec<FailureResponse>,
}

/// Response of `POST /api/v1/transfers/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Search identifier.
    pub search_id: String,
    /// Offers, cheapest first.
    pub offers: Vec<OfferResponse>,
    /// Supplier summary.
    pub suppliers: SupplierSummaryResponse,
    /// Creation time, RFC 3339.
    pub created_at: String,
    /// Search duration.
    pub elapsed_ms: u64,
}

impl From<&SearchResult> for SearchResponse {
    fn from(result: &SearchResult) -> Self {
        let summary = result.summary();
        Self {
            search_id: result.search_id().to_string(),
            offers: result.offers().iter().map(OfferResponse::from).collect(),
            suppliers: SupplierSummaryResponse {
                queried: summary.queried(),
                succeeded: summary.succeeded().iter().map(ToString::to_string).collect(),
                failed: summary.failed().iter().map(FailureResponse::from).collect(),
            },
            created_at: result.created_at().to_rfc3339(),
            elapsed_ms: result.elapsed_ms(),
        }
    }
}

/// `POST /api/v1/transfers/search`
///
/// # Errors
///
/// Returns `400` if the body is not a valid request. Supplier failures
/// are part of the `200` response.
pub async fn search_transfers(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchRequestDto>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let request = json_body(payload)?.into_domain()?;
    let result = state.orchestrator.search(&request).await?;
    Ok(Json(SearchResponse::from(&result)))
}

// ============================================================================
// Suppliers
// ============================================================================

/// A registered supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierResponse {
    /// Supplier code.
    pub code: String,
    /// Current enabled flag.
    pub enabled: bool,
}

/// Body of `PUT /api/v1/suppliers/{code}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSupplierRequest {
    /// New enabled flag.
    pub enabled: bool,
}

/// `GET /api/v1/suppliers`
pub async fn list_suppliers(State(state): State<Arc<AppState>>) -> Json<Vec<SupplierResponse>> {
    let suppliers = state
        .registry
        .all_suppliers()
        .iter()
        .map(|supplier| SupplierResponse {
            code: supplier.code().to_string(),
            enabled: supplier.is_enabled(),
        })
        .collect();
    Json(suppliers)
}

/// `PUT /api/v1/suppliers/{code}`
///
/// # Errors
///
/// Returns `400` for a malformed body or code and `404` if no supplier is
/// configured under it.
pub async fn update_supplier(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    payload: Result<Json<UpdateSupplierRequest>, JsonRejection>,
) -> Result<Json<SupplierResponse>, ApiError> {
    let body = json_body(payload)?;
    let code = SupplierCode::parse(&code).map_err(ApplicationError::from)?;
    if state.switchboard.set_enabled(&code, body.enabled).is_none() {
        return Err(ApplicationError::not_found("supplier", code.as_str()).into());
    }
    Ok(Json(SupplierResponse {
        code: code.to_string(),
        enabled: body.enabled,
    }))
}

// ============================================================================
// Health
// ============================================================================

/// Response of `GET /api/v1/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `ok` while the service is serving.
    pub status: String,
    /// Registered suppliers.
    pub suppliers: usize,
    /// Currently enabled suppliers.
    pub enabled_suppliers: usize,
}

/// `GET /api/v1/health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        suppliers: state.registry.len(),
        enabled_suppliers: state.registry.enabled_count(),
    })
}

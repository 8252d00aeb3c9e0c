//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! ## Search
//! - `POST /api/v1/transfers/search` - Search all enabled suppliers
//!
//! ## Suppliers
//! - `GET /api/v1/suppliers` - List registered suppliers with their enabled flag
//! - `PUT /api/v1/suppliers/{code}` - Enable or disable a supplier
//!
//! ## Health
//! - `GET /api/v1/health` - Health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use transfer_search::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState::new(orchestrator, switchboard));
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    ApiError, AppState, ErrorResponse, FailureResponse, HealthResponse, LocationDto,
    OfferResponse, PriceResponse, SearchRequestDto, SearchResponse, SupplierResponse,
    SupplierSummaryResponse, UpdateSupplierRequest, VehicleResponse,
};
pub use routes::create_router;

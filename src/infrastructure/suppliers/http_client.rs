//! # HTTP Client Utilities
//!
//! Shared HTTP client for supplier adapters.
//!
//! Wraps `reqwest` with:
//! - A default timeout plus an optional per-request timeout
//! - JSON request and response bodies
//! - Mapping of transport failures and HTTP statuses onto [`SupplierError`]
//!
//! # Examples
//!
//! ```ignore
//! use transfer_search::infrastructure::suppliers::http_client::HttpClient;
//!
//! let client = HttpClient::new(5000)?;
//! let response: MyResponse = client.post("https://supplier.example/search", &body, None).await?;
//! ```

use crate::infrastructure::suppliers::error::{SupplierError, SupplierResult};
use reqwest::header::HeaderMap;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for supplier adapters.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified default timeout.
    ///
    /// # Errors
    ///
    /// Returns `SupplierError::InternalError` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> SupplierResult<Self> {
        Self::with_headers(timeout_ms, HeaderMap::new())
    }

    /// Creates a new HTTP client sending `default_headers` on every request.
    ///
    /// # Errors
    ///
    /// Returns `SupplierError::InternalError` if the client cannot be created.
    pub fn with_headers(timeout_ms: u64, default_headers: HeaderMap) -> SupplierResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .default_headers(default_headers)
            .build()
            .map_err(|e| {
                SupplierError::internal_error(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the default timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// POSTs `body` as JSON and deserializes the JSON response.
    ///
    /// `timeout` overrides the default timeout for this request only.
    ///
    /// # Errors
    ///
    /// - `SupplierError::Timeout` / `Connection` if the request fails
    /// - A status-specific error for non-2xx responses
    /// - `SupplierError::ProtocolError` if the body cannot be parsed
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        timeout: Option<Duration>,
    ) -> SupplierResult<T> {
        let mut request = self.client.post(url).json(body);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        handle_response(response).await
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> SupplierResult<T> {
    let status = response.status();

    if status.is_success() {
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice::<T>(&bytes)
            .map_err(|e| SupplierError::protocol_error(format!("failed to parse response: {}", e)))
    } else {
        let error_body = response.text().await.unwrap_or_default();
        Err(map_status_error(status, &error_body))
    }
}

fn map_reqwest_error(error: reqwest::Error) -> SupplierError {
    if error.is_timeout() {
        SupplierError::timeout("request timed out")
    } else if error.is_connect() {
        SupplierError::connection(format!("connection failed: {}", error))
    } else if error.is_decode() {
        SupplierError::protocol_error(format!("failed to read response: {}", error))
    } else {
        SupplierError::connection(format!("HTTP request failed: {}", error))
    }
}

fn map_status_error(status: StatusCode, body: &str) -> SupplierError {
    match status {
        StatusCode::BAD_REQUEST => SupplierError::invalid_request(format!("bad request: {}", body)),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            SupplierError::authentication(format!("authentication failed: {}", body))
        }
        StatusCode::NOT_FOUND => SupplierError::protocol_error(format!("endpoint not found: {}", body)),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            SupplierError::timeout(format!("upstream timed out ({})", status))
        }
        StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            SupplierError::rejected(format!("declined ({}): {}", status, body), None)
        }
        StatusCode::TOO_MANY_REQUESTS => SupplierError::rate_limited("rate limit exceeded"),
        s if s.is_server_error() => {
            SupplierError::connection(format!("server error ({}): {}", status, body))
        }
        _ => SupplierError::protocol_error(format!("HTTP error ({}): {}", status, body)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::FailureKind;

    #[test]
    fn new_client() {
        let client = HttpClient::new(5000);
        assert!(client.is_ok());
        assert_eq!(client.unwrap().timeout_ms(), 5000);
    }

    #[test]
    fn with_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Api-Key", "secret".parse().unwrap());
        assert!(HttpClient::with_headers(3000, headers).is_ok());
    }

    #[test]
    fn status_mapping() {
        let cases = [
            (StatusCode::BAD_REQUEST, FailureKind::BusinessRejection),
            (StatusCode::UNAUTHORIZED, FailureKind::Transport),
            (StatusCode::NOT_FOUND, FailureKind::MalformedResponse),
            (StatusCode::GATEWAY_TIMEOUT, FailureKind::Timeout),
            (StatusCode::UNPROCESSABLE_ENTITY, FailureKind::BusinessRejection),
            (StatusCode::CONFLICT, FailureKind::BusinessRejection),
            (StatusCode::TOO_MANY_REQUESTS, FailureKind::Transport),
            (StatusCode::BAD_GATEWAY, FailureKind::Transport),
            (StatusCode::IM_A_TEAPOT, FailureKind::MalformedResponse),
        ];
        for (status, kind) in cases {
            assert_eq!(map_status_error(status, "").kind(), kind, "status {status}");
        }
    }
}

//! # In-Memory Supplier
//!
//! Scripted implementation of [`TransferSupplier`] for tests, benchmarks and
//! local runs without real backends.
//!
//! The supplier answers every search with the same scripted response, after
//! an optional delay, and counts how often it was called.

use crate::domain::entities::{SearchRequest, SupplierOffer};
use crate::domain::value_objects::SupplierCode;
use crate::infrastructure::suppliers::error::{SupplierError, SupplierResult};
use crate::infrastructure::suppliers::switch::SupplierSwitch;
use crate::infrastructure::suppliers::traits::{SearchContext, TransferSupplier};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// What an [`InMemorySupplier`] answers with.
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    /// Return these offers.
    Offers(Vec<SupplierOffer>),
    /// Fail with this error.
    Error(SupplierError),
    /// Never answer.
    Hang,
}

/// Supplier returning a scripted response.
#[derive(Debug, Clone)]
pub struct InMemorySupplier {
    code: SupplierCode,
    switch: SupplierSwitch,
    response: ScriptedResponse,
    delay: Option<Duration>,
    timeout: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl InMemorySupplier {
    /// Creates an enabled supplier answering with `response`.
    #[must_use]
    pub fn new(code: impl Into<String>, response: ScriptedResponse) -> Self {
        Self {
            code: SupplierCode::new(code),
            switch: SupplierSwitch::new(true),
            response,
            delay: None,
            timeout: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Creates a supplier answering with `offers`.
    #[must_use]
    pub fn with_offers(code: impl Into<String>, offers: Vec<SupplierOffer>) -> Self {
        Self::new(code, ScriptedResponse::Offers(offers))
    }

    /// Creates a supplier failing with `error`.
    #[must_use]
    pub fn failing(code: impl Into<String>, error: SupplierError) -> Self {
        Self::new(code, ScriptedResponse::Error(error))
    }

    /// Creates a supplier that never answers.
    #[must_use]
    pub fn hanging(code: impl Into<String>) -> Self {
        Self::new(code, ScriptedResponse::Hang)
    }

    /// Delays every answer by `delay`.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the adapter-specific timeout override.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Binds the enabled flag to `switch`.
    #[must_use]
    pub fn with_switch(mut self, switch: SupplierSwitch) -> Self {
        self.switch = switch;
        self
    }

    /// Starts the supplier disabled.
    #[must_use]
    pub fn disabled(self) -> Self {
        self.switch.set(false);
        self
    }

    /// Returns a handle to the enabled flag.
    #[must_use]
    pub fn switch(&self) -> SupplierSwitch {
        self.switch.clone()
    }

    /// Returns how many searches reached this supplier.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransferSupplier for InMemorySupplier {
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
        _request: &SearchRequest,
        _context: &SearchContext,
    ) -> SupplierResult<Vec<SupplierOffer>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.response {
            ScriptedResponse::Offers(offers) => Ok(offers.clone()),
            ScriptedResponse::Error(error) => Err(error.clone()),
            ScriptedResponse::Hang => std::future::pending().await,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{FailureKind, Location, SearchId};
    use tokio::time::Instant;

    fn request() -> SearchRequest {
        SearchRequest::new(
            Location::new("BCN").unwrap(),
            Location::new("port-vell").unwrap(),
            2,
        )
        .unwrap()
    }

    fn context() -> SearchContext {
        SearchContext::new(SearchId::new_v4(), Instant::now() + Duration::from_secs(1))
    }

    #[tokio::test]
    async fn counts_calls() {
        let supplier = InMemorySupplier::with_offers("a", vec![]);
        assert_eq!(supplier.call_count(), 0);

        let offers = supplier.search(&request(), &context()).await.unwrap();
        assert!(offers.is_empty());
        assert_eq!(supplier.call_count(), 1);

        // clones share the counter
        let clone = supplier.clone();
        clone.search(&request(), &context()).await.unwrap();
        assert_eq!(supplier.call_count(), 2);
    }

    #[tokio::test]
    async fn scripted_error() {
        let supplier = InMemorySupplier::failing("a", SupplierError::connection("reset"));
        let error = supplier.search(&request(), &context()).await.unwrap_err();
        assert_eq!(error.kind(), FailureKind::Transport);
    }

    #[tokio::test(start_paused = true)]
    async fn hanging_never_answers() {
        let supplier = InMemorySupplier::hanging("a");
        let result = tokio::time::timeout(
            Duration::from_secs(60),
            supplier.search(&request(), &context()),
        )
        .await;
        assert!(result.is_err());
    }

    #[test]
    fn disabled_and_switch() {
        let supplier = InMemorySupplier::with_offers("a", vec![]).disabled();
        assert!(!supplier.is_enabled());
        supplier.switch().set(true);
        assert!(supplier.is_enabled());
    }
}

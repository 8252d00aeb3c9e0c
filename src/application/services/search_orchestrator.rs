//! # Search Orchestrator
//!
//! Runs one aggregate search against every enabled supplier.
//!
//! # Dispatch
//!
//! Each enabled supplier gets its own tokio task. Inside the task the
//! supplier call is bounded by the per-supplier timeout (the adapter's own
//! override, or [`OrchestratorConfig::per_supplier_timeout_ms`]). The join
//! over all tasks is bounded by the overall deadline; a task still running
//! at that point is aborted and reported as a timeout. Dropping the search
//! future aborts every supplier task still in flight.
//!
//! Supplier failures never escape: each one becomes a
//! [`SupplierFailure`](crate::domain::entities::SupplierFailure) in the
//! result summary. The only error the orchestrator returns is an invalid
//! request, detected before anything is dispatched.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::result_assembler::ResultAssembler;
use crate::application::services::supplier_registry::SupplierRegistry;
use crate::domain::entities::{
    Offer, SearchRequest, SearchResult, SupplierOffer, SupplierSearchOutcome,
};
use crate::domain::value_objects::{FailureKind, SearchId, SupplierCode};
use crate::infrastructure::suppliers::{SearchContext, TransferSupplier};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, timeout, timeout_at};
use tracing::Instrument;

/// Configuration for search orchestration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrchestratorConfig {
    /// Overall search deadline in milliseconds.
    pub overall_timeout_ms: u64,
    /// Default per-supplier timeout in milliseconds.
    pub per_supplier_timeout_ms: u64,
    /// Maximum number of offers to return.
    pub max_offers: Option<usize>,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            overall_timeout_ms: 10_000,
            per_supplier_timeout_ms: 5_000,
            max_offers: None,
        }
    }
}

impl OrchestratorConfig {
    /// Creates a configuration with the specified overall timeout.
    #[must_use]
    pub fn with_timeout(overall_timeout_ms: u64) -> Self {
        Self {
            overall_timeout_ms,
            ..Default::default()
        }
    }

    /// Sets the default per-supplier timeout.
    #[must_use]
    pub fn with_per_supplier_timeout(mut self, timeout_ms: u64) -> Self {
        self.per_supplier_timeout_ms = timeout_ms;
        self
    }

    /// Sets the maximum number of offers to return.
    #[must_use]
    pub fn with_max_offers(mut self, max: usize) -> Self {
        self.max_offers = Some(max);
        self
    }

    fn overall_timeout(&self) -> Duration {
        Duration::from_millis(self.overall_timeout_ms)
    }

    fn per_supplier_timeout(&self) -> Duration {
        Duration::from_millis(self.per_supplier_timeout_ms)
    }
}

/// Fans searches out to suppliers and assembles the aggregate result.
#[derive(Debug, Clone)]
pub struct SearchOrchestrator {
    registry: Arc<SupplierRegistry>,
    assembler: ResultAssembler,
    config: OrchestratorConfig,
}

impl SearchOrchestrator {
    /// Creates a new orchestrator.
    #[must_use]
    pub fn new(registry: Arc<SupplierRegistry>, config: OrchestratorConfig) -> Self {
        let assembler = match config.max_offers {
            Some(max) => ResultAssembler::new().with_max_offers(max),
            None => ResultAssembler::new(),
        };
        Self {
            registry,
            assembler,
            config,
        }
    }

    /// Creates an orchestrator with default configuration.
    #[must_use]
    pub fn with_defaults(registry: Arc<SupplierRegistry>) -> Self {
        Self::new(registry, OrchestratorConfig::default())
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Returns the registry searches are dispatched from.
    #[must_use]
    pub fn registry(&self) -> &Arc<SupplierRegistry> {
        &self.registry
    }

    /// Searches all currently enabled suppliers.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` if `request` violates its
    /// invariants. No supplier is called in that case. Supplier failures
    /// are reported in the result summary, never as an error.
    pub async fn search(&self, request: &SearchRequest) -> ApplicationResult<SearchResult> {
        request
            .validate()
            .map_err(|e| ApplicationError::validation(e.to_string()))?;

        let search_id = SearchId::new_v4();
        let suppliers = self.registry.enabled_suppliers();
        let span = tracing::info_span!(
            "search",
            search_id = %search_id,
            suppliers = suppliers.len()
        );

        let result = self
            .run(search_id, suppliers, request)
            .instrument(span)
            .await;
        Ok(result)
    }

    async fn run(
        &self,
        search_id: SearchId,
        suppliers: Vec<Arc<dyn TransferSupplier>>,
        request: &SearchRequest,
    ) -> SearchResult {
        let started = Instant::now();
        let overall_deadline = started + self.config.overall_timeout();
        let request = Arc::new(request.clone());

        tracing::debug!(%request, "dispatching search");

        let tasks: Vec<SupplierTask> = suppliers
            .into_iter()
            .map(|supplier| {
                let code = supplier.code().clone();
                let per_supplier = supplier
                    .timeout()
                    .unwrap_or_else(|| self.config.per_supplier_timeout());
                let task = dispatch(
                    supplier,
                    Arc::clone(&request),
                    search_id,
                    per_supplier,
                    overall_deadline,
                );
                SupplierTask {
                    code,
                    handle: tokio::spawn(task.in_current_span()),
                }
            })
            .collect();

        let outcomes = join_all(tasks.into_iter().map(|task| collect(task, overall_deadline))).await;

        let elapsed_ms = millis(started.elapsed());
        let result = self
            .assembler
            .assemble(search_id, &outcomes)
            .with_elapsed_ms(elapsed_ms);

        tracing::info!(
            offers = result.offers().len(),
            succeeded = result.summary().succeeded().len(),
            failed = result.summary().failed().len(),
            elapsed_ms,
            "search completed"
        );

        result
    }
}

/// Runs one supplier search inside its own timeout scope.
async fn dispatch(
    supplier: Arc<dyn TransferSupplier>,
    request: Arc<SearchRequest>,
    search_id: SearchId,
    per_supplier: Duration,
    overall_deadline: Instant,
) -> SupplierSearchOutcome {
    let code = supplier.code().clone();
    let started = Instant::now();
    let context = SearchContext::new(search_id, (started + per_supplier).min(overall_deadline));

    match timeout(per_supplier, supplier.search(&request, &context)).await {
        Ok(Ok(offers)) => {
            let outcome = normalize(search_id, code, offers);
            if outcome.is_success() {
                tracing::debug!(
                    supplier = %outcome.supplier(),
                    offers = outcome.offers().len(),
                    elapsed_ms = millis(started.elapsed()),
                    "supplier answered"
                );
            }
            outcome
        }
        Ok(Err(error)) => {
            let kind = error.kind();
            tracing::warn!(supplier = %code, %kind, %error, "supplier search failed");
            SupplierSearchOutcome::failure(code, kind, error.to_string())
        }
        Err(_) => {
            let kind = FailureKind::Timeout;
            tracing::warn!(
                supplier = %code,
                %kind,
                timeout_ms = millis(per_supplier),
                "supplier timed out"
            );
            SupplierSearchOutcome::failure(
                code,
                kind,
                format!("no answer within {} ms", millis(per_supplier)),
            )
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Stamps supplier offers with their provenance.
///
/// A single unusable offer turns the whole answer into a malformed response.
fn normalize(
    search_id: SearchId,
    code: SupplierCode,
    offers: Vec<SupplierOffer>,
) -> SupplierSearchOutcome {
    if let Err(error) = offers.iter().try_for_each(SupplierOffer::validate) {
        let kind = FailureKind::MalformedResponse;
        tracing::warn!(supplier = %code, %kind, %error, "supplier returned an unusable offer");
        return SupplierSearchOutcome::failure(code, kind, error.to_string());
    }

    let offers = offers
        .into_iter()
        .map(|offer| Offer::from_supplier(search_id, code.clone(), offer))
        .collect();
    SupplierSearchOutcome::success(code, offers)
}

/// A spawned supplier search, aborted when dropped.
struct SupplierTask {
    code: SupplierCode,
    handle: JoinHandle<SupplierSearchOutcome>,
}

impl Drop for SupplierTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Awaits one supplier task up to the overall deadline.
async fn collect(mut task: SupplierTask, overall_deadline: Instant) -> SupplierSearchOutcome {
    let code = task.code.clone();
    match timeout_at(overall_deadline, &mut task.handle).await {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(join_error)) => {
            let kind = FailureKind::Internal;
            tracing::warn!(supplier = %code, %kind, error = %join_error, "supplier task failed");
            SupplierSearchOutcome::failure(code, kind, format!("supplier task failed: {join_error}"))
        }
        Err(_) => {
            let kind = FailureKind::Timeout;
            tracing::warn!(supplier = %code, %kind, "overall search deadline exceeded");
            SupplierSearchOutcome::failure(code, kind, "overall search deadline exceeded")
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{
        Currency, Location, Money, OfferId, Vehicle, VehicleCategory,
    };
    use crate::infrastructure::suppliers::{InMemorySupplier, SupplierError, SupplierResult};
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn request() -> SearchRequest {
        SearchRequest::new(
            Location::new("CDG").unwrap(),
            Location::new("hotel-lutetia").unwrap(),
            2,
        )
        .unwrap()
    }

    fn raw_offer(id: &str, euros: i64) -> SupplierOffer {
        SupplierOffer::new(
            OfferId::new(id),
            Money::new(Decimal::new(euros, 0), Currency::new("EUR").unwrap()).unwrap(),
            Vehicle::new(VehicleCategory::Sedan),
            3,
            format!("token-{id}"),
        )
    }

    fn orchestrator(suppliers: &[&InMemorySupplier], config: OrchestratorConfig) -> SearchOrchestrator {
        let registry = SupplierRegistry::new(
            suppliers
                .iter()
                .map(|s| Arc::new((*s).clone()) as Arc<dyn TransferSupplier>),
        );
        SearchOrchestrator::new(Arc::new(registry), config)
    }

    fn failure_kinds(result: &SearchResult) -> Vec<(&str, FailureKind)> {
        result
            .summary()
            .failed()
            .iter()
            .map(|f| (f.supplier().as_str(), f.kind()))
            .collect()
    }

    #[derive(Debug)]
    struct PanickingSupplier {
        code: SupplierCode,
    }

    #[async_trait]
    impl TransferSupplier for PanickingSupplier {
        fn code(&self) -> &SupplierCode {
            &self.code
        }

        fn is_enabled(&self) -> bool {
            true
        }

        async fn search(
            &self,
            _request: &SearchRequest,
            _context: &SearchContext,
        ) -> SupplierResult<Vec<SupplierOffer>> {
            panic!("adapter bug");
        }
    }

    /// Never answers; flags when its in-flight call is dropped.
    #[derive(Debug)]
    struct StallingSupplier {
        code: SupplierCode,
        started: Arc<AtomicBool>,
        dropped: Arc<AtomicBool>,
    }

    struct DropFlag(Arc<AtomicBool>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl TransferSupplier for StallingSupplier {
        fn code(&self) -> &SupplierCode {
            &self.code
        }

        fn is_enabled(&self) -> bool {
            true
        }

        fn timeout(&self) -> Option<Duration> {
            Some(Duration::from_secs(3_600))
        }

        async fn search(
            &self,
            _request: &SearchRequest,
            _context: &SearchContext,
        ) -> SupplierResult<Vec<SupplierOffer>> {
            let _flag = DropFlag(Arc::clone(&self.dropped));
            self.started.store(true, Ordering::SeqCst);
            std::future::pending().await
        }
    }

    mod config {
        use super::*;

        #[test]
        fn defaults() {
            let config = OrchestratorConfig::default();
            assert_eq!(config.overall_timeout_ms, 10_000);
            assert_eq!(config.per_supplier_timeout_ms, 5_000);
            assert!(config.max_offers.is_none());

            let orchestrator = SearchOrchestrator::with_defaults(Arc::new(SupplierRegistry::default()));
            assert_eq!(orchestrator.config(), &config);
            assert!(orchestrator.registry().is_empty());
        }

        #[test]
        fn builders() {
            let config = OrchestratorConfig::with_timeout(3_000)
                .with_per_supplier_timeout(1_000)
                .with_max_offers(20);
            assert_eq!(config.overall_timeout_ms, 3_000);
            assert_eq!(config.per_supplier_timeout_ms, 1_000);
            assert_eq!(config.max_offers, Some(20));
        }
    }

    mod validation {
        use super::*;

        #[tokio::test]
        async fn same_location_is_rejected_before_dispatch() {
            let supplier = InMemorySupplier::with_offers("s1", vec![raw_offer("a", 10)]);
            let orchestrator = orchestrator(&[&supplier], OrchestratorConfig::default());

            let invalid = SearchRequest::from_parts(
                Location::new("CDG").unwrap(),
                Location::new("cdg").unwrap(),
                2,
                None,
                None,
            );
            let err = orchestrator.search(&invalid).await.unwrap_err();
            assert!(err.is_validation());
            assert_eq!(supplier.call_count(), 0);
        }

        #[tokio::test]
        async fn zero_passengers_is_rejected() {
            let supplier = InMemorySupplier::with_offers("s1", vec![]);
            let orchestrator = orchestrator(&[&supplier], OrchestratorConfig::default());

            let invalid = SearchRequest::from_parts(
                Location::new("CDG").unwrap(),
                Location::new("ORY").unwrap(),
                0,
                None,
                None,
            );
            assert!(orchestrator.search(&invalid).await.unwrap_err().is_validation());
            assert_eq!(supplier.call_count(), 0);
        }
    }

    mod dispatch {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn cheapest_offer_first() {
            let s1 = InMemorySupplier::with_offers("s1", vec![raw_offer("a", 40)]);
            let s2 = InMemorySupplier::with_offers("s2", vec![raw_offer("b", 25)]);
            let orchestrator = orchestrator(&[&s1, &s2], OrchestratorConfig::default());

            let result = orchestrator.search(&request()).await.unwrap();

            let offers: Vec<_> = result
                .offers()
                .iter()
                .map(|o| (o.supplier_code().as_str(), o.price().amount()))
                .collect();
            assert_eq!(
                offers,
                vec![("s2", Decimal::new(25, 0)), ("s1", Decimal::new(40, 0))]
            );
            assert_eq!(result.summary().queried(), 2);
            assert!(result.summary().failed().is_empty());
        }

        #[tokio::test(start_paused = true)]
        async fn offers_carry_search_and_supplier() {
            let s1 = InMemorySupplier::with_offers("s1", vec![raw_offer("a", 40)]);
            let orchestrator = orchestrator(&[&s1], OrchestratorConfig::default());

            let result = orchestrator.search(&request()).await.unwrap();
            let offer = &result.offers()[0];
            assert_eq!(offer.search_id(), result.search_id());
            assert_eq!(offer.supplier_code().as_str(), "s1");
            assert_eq!(offer.booking_token(), "token-a");
        }

        #[tokio::test(start_paused = true)]
        async fn each_search_gets_fresh_id() {
            let s1 = InMemorySupplier::with_offers("s1", vec![]);
            let orchestrator = orchestrator(&[&s1], OrchestratorConfig::default());

            let first = orchestrator.search(&request()).await.unwrap();
            let second = orchestrator.search(&request()).await.unwrap();
            assert_ne!(first.search_id(), second.search_id());
        }

        #[tokio::test(start_paused = true)]
        async fn disabled_suppliers_are_not_called() {
            let s1 = InMemorySupplier::with_offers("s1", vec![raw_offer("a", 40)]);
            let s2 = InMemorySupplier::with_offers("s2", vec![raw_offer("b", 25)]).disabled();
            let orchestrator = orchestrator(&[&s1, &s2], OrchestratorConfig::default());

            let result = orchestrator.search(&request()).await.unwrap();
            assert_eq!(result.offers().len(), 1);
            assert_eq!(result.summary().queried(), 1);
            assert_eq!(s2.call_count(), 0);

            s2.switch().set(true);
            let result = orchestrator.search(&request()).await.unwrap();
            assert_eq!(result.offers().len(), 2);
            assert_eq!(s2.call_count(), 1);
        }

        #[tokio::test(start_paused = true)]
        async fn all_disabled_yields_empty_result() {
            let s1 = InMemorySupplier::with_offers("s1", vec![raw_offer("a", 40)]).disabled();
            let s2 = InMemorySupplier::with_offers("s2", vec![raw_offer("b", 25)]).disabled();
            let orchestrator = orchestrator(&[&s1, &s2], OrchestratorConfig::default());

            let result = orchestrator.search(&request()).await.unwrap();
            assert!(result.offers().is_empty());
            assert!(result.summary().failed().is_empty());
            assert_eq!(result.summary().queried(), 0);
        }

        #[tokio::test(start_paused = true)]
        async fn max_offers_applies() {
            let s1 = InMemorySupplier::with_offers(
                "s1",
                vec![raw_offer("a", 40), raw_offer("b", 30), raw_offer("c", 20)],
            );
            let orchestrator =
                orchestrator(&[&s1], OrchestratorConfig::default().with_max_offers(2));

            let result = orchestrator.search(&request()).await.unwrap();
            let ids: Vec<_> = result.offers().iter().map(|o| o.offer_id().as_str()).collect();
            assert_eq!(ids, vec!["c", "b"]);
        }
    }

    mod isolation {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn one_failure_keeps_other_offers() {
            let s1 = InMemorySupplier::with_offers("s1", vec![raw_offer("a", 40)]);
            let s2 = InMemorySupplier::failing("s2", SupplierError::connection("reset by peer"));
            let s3 = InMemorySupplier::with_offers("s3", vec![raw_offer("c", 35)]);
            let orchestrator = orchestrator(&[&s1, &s2, &s3], OrchestratorConfig::default());

            let result = orchestrator.search(&request()).await.unwrap();
            assert_eq!(result.offers().len(), 2);
            assert_eq!(failure_kinds(&result), vec![("s2", FailureKind::Transport)]);
            assert!(result.summary().is_partial_failure());
        }

        #[tokio::test(start_paused = true)]
        async fn per_supplier_deadline_times_out_slow_supplier() {
            let s1 = InMemorySupplier::with_offers("s1", vec![raw_offer("a", 40)]);
            let s2 = InMemorySupplier::with_offers("s2", vec![raw_offer("b", 25)]);
            let s3 = InMemorySupplier::with_offers("s3", vec![raw_offer("c", 10)])
                .with_delay(Duration::from_millis(6_000));
            let orchestrator = orchestrator(&[&s1, &s2, &s3], OrchestratorConfig::default());

            let result = orchestrator.search(&request()).await.unwrap();
            let suppliers: Vec<_> = result
                .offers()
                .iter()
                .map(|o| o.supplier_code().as_str())
                .collect();
            assert_eq!(suppliers, vec!["s2", "s1"]);
            assert_eq!(failure_kinds(&result), vec![("s3", FailureKind::Timeout)]);
        }

        #[tokio::test(start_paused = true)]
        async fn adapter_timeout_override_wins() {
            let s1 = InMemorySupplier::with_offers("s1", vec![raw_offer("a", 40)])
                .with_delay(Duration::from_millis(200))
                .with_timeout(Duration::from_millis(100));
            let orchestrator = orchestrator(&[&s1], OrchestratorConfig::default());

            let result = orchestrator.search(&request()).await.unwrap();
            assert!(result.offers().is_empty());
            assert_eq!(failure_kinds(&result), vec![("s1", FailureKind::Timeout)]);
        }

        #[tokio::test(start_paused = true)]
        async fn overall_deadline_bounds_hung_suppliers() {
            let fast = InMemorySupplier::with_offers("fast", vec![raw_offer("a", 40)]);
            let hung = InMemorySupplier::hanging("hung").with_timeout(Duration::from_secs(600));
            let orchestrator = orchestrator(
                &[&fast, &hung],
                OrchestratorConfig::with_timeout(1_000).with_per_supplier_timeout(500),
            );

            let started = Instant::now();
            let result = orchestrator.search(&request()).await.unwrap();
            assert!(started.elapsed() <= Duration::from_millis(1_050));

            assert_eq!(result.offers().len(), 1);
            assert_eq!(failure_kinds(&result), vec![("hung", FailureKind::Timeout)]);
            assert!(result.summary().failed()[0].message().contains("overall"));
        }

        #[tokio::test(start_paused = true)]
        async fn all_failures_still_return_result() {
            let s1 = InMemorySupplier::failing("s1", SupplierError::no_availability("fully booked"));
            let s2 = InMemorySupplier::failing("s2", SupplierError::protocol_error("bad json"));
            let s3 = InMemorySupplier::hanging("s3");
            let orchestrator = orchestrator(
                &[&s1, &s2, &s3],
                OrchestratorConfig::with_timeout(2_000).with_per_supplier_timeout(1_000),
            );

            let result = orchestrator.search(&request()).await.unwrap();
            assert!(result.offers().is_empty());
            assert!(result.summary().all_failed());
            assert_eq!(
                failure_kinds(&result),
                vec![
                    ("s1", FailureKind::BusinessRejection),
                    ("s2", FailureKind::MalformedResponse),
                    ("s3", FailureKind::Timeout),
                ]
            );
        }

        #[tokio::test(start_paused = true)]
        async fn unusable_offer_is_malformed_response() {
            let broken = SupplierOffer::new(
                OfferId::new("x"),
                Money::new(Decimal::new(10, 0), Currency::new("EUR").unwrap()).unwrap(),
                Vehicle::new(VehicleCategory::Van),
                0,
                "token",
            );
            let s1 = InMemorySupplier::with_offers("s1", vec![raw_offer("a", 40), broken]);
            let s2 = InMemorySupplier::with_offers("s2", vec![raw_offer("b", 25)]);
            let orchestrator = orchestrator(&[&s1, &s2], OrchestratorConfig::default());

            let result = orchestrator.search(&request()).await.unwrap();
            assert_eq!(result.offers().len(), 1);
            assert_eq!(
                failure_kinds(&result),
                vec![("s1", FailureKind::MalformedResponse)]
            );
        }

        #[tokio::test(start_paused = true)]
        async fn dropping_search_aborts_supplier_calls() {
            let started = Arc::new(AtomicBool::new(false));
            let dropped = Arc::new(AtomicBool::new(false));
            let registry = SupplierRegistry::new(vec![Arc::new(StallingSupplier {
                code: SupplierCode::new("stall"),
                started: Arc::clone(&started),
                dropped: Arc::clone(&dropped),
            }) as Arc<dyn TransferSupplier>]);
            let orchestrator = SearchOrchestrator::new(
                Arc::new(registry),
                OrchestratorConfig::with_timeout(3_600_000).with_per_supplier_timeout(3_600_000),
            );

            let request = request();
            let cancelled =
                tokio::time::timeout(Duration::from_millis(50), orchestrator.search(&request)).await;
            assert!(cancelled.is_err());
            assert!(started.load(Ordering::SeqCst));

            // let the runtime reap the aborted task
            tokio::time::sleep(Duration::from_millis(10)).await;
            assert!(dropped.load(Ordering::SeqCst));
        }

        #[tokio::test]
        async fn panicking_adapter_is_internal_failure() {
            let registry = SupplierRegistry::new(vec![
                Arc::new(PanickingSupplier {
                    code: SupplierCode::new("bad"),
                }) as Arc<dyn TransferSupplier>,
                Arc::new(InMemorySupplier::with_offers("good", vec![raw_offer("a", 40)])),
            ]);
            let orchestrator =
                SearchOrchestrator::new(Arc::new(registry), OrchestratorConfig::default());

            let result = orchestrator.search(&request()).await.unwrap();
            assert_eq!(result.offers().len(), 1);
            assert_eq!(failure_kinds(&result), vec![("bad", FailureKind::Internal)]);
        }
    }
}

//! Global search aggregation with debounce and supersede protection.
//!
//! The back-office command palette fires a request per keystroke. This
//! service coalesces them: a query only reaches the backend after a 300ms
//! idle window, and a monotonically increasing generation counter guarantees
//! that a response from a superseded query can never overwrite newer results,
//! regardless of network reordering.
//!
//! The flat hit list from the single backend search endpoint is partitioned
//! into typed buckets (orders / products / users / notifications), preserving
//! backend order within each bucket.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, instrument};

use crate::api::types::{SearchHit, SearchHitKind};
use crate::api::{AdminApi, ApiError};

/// Default hits per bucket when the caller doesn't ask for a limit.
pub const DEFAULT_BUCKET_LIMIT: u32 = 5;

/// Hard cap on hits per bucket.
pub const MAX_BUCKET_LIMIT: u32 = 20;

/// Seam over the backend search endpoint so the aggregator can be driven by
/// a mock in tests.
pub trait SearchBackend: Send + Sync + 'static {
    /// Run a search, returning the flat hit list.
    fn search(
        &self,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<SearchHit>, ApiError>> + Send;
}

impl SearchBackend for AdminApi {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchHit>, ApiError> {
        self.global_search(query, limit).await
    }
}

/// Hits partitioned by entity kind, backend order preserved per bucket.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBuckets {
    pub orders: Vec<SearchHit>,
    pub products: Vec<SearchHit>,
    pub users: Vec<SearchHit>,
    pub notifications: Vec<SearchHit>,
}

impl SearchBuckets {
    /// Partition a flat hit list, keeping at most `per_bucket` hits per kind.
    #[must_use]
    pub fn group(hits: Vec<SearchHit>, per_bucket: usize) -> Self {
        let mut buckets = Self::default();

        for hit in hits {
            let bucket = match hit.kind {
                SearchHitKind::Order => &mut buckets.orders,
                SearchHitKind::Product => &mut buckets.products,
                SearchHitKind::User => &mut buckets.users,
                SearchHitKind::Notification => &mut buckets.notifications,
            };
            if bucket.len() < per_bucket {
                bucket.push(hit);
            }
        }

        buckets
    }

    /// Whether every bucket is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.orders.is_empty()
            && self.products.is_empty()
            && self.users.is_empty()
            && self.notifications.is_empty()
    }

    /// Total hits across all buckets.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.orders.len() + self.products.len() + self.users.len() + self.notifications.len()
    }
}

/// Observable aggregator state, published through a watch channel.
///
/// Lifecycle per submission: `Idle -> Debouncing -> Searching -> (Results |
/// Error)`. `reset` forces `Idle` and clears results.
#[derive(Debug, Clone, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Debouncing {
        query: String,
    },
    Searching {
        query: String,
    },
    Results {
        query: String,
        buckets: SearchBuckets,
    },
    Error {
        query: String,
        message: String,
    },
}

/// What a single submission resolved to.
#[derive(Debug)]
pub enum SearchOutcome {
    /// The submission survived the debounce window and produced results.
    Results(SearchBuckets),
    /// A newer submission arrived; this one never reached the client, or its
    /// response came back stale and was discarded.
    Superseded,
    /// The backend call failed; the message is rendered inline.
    Failed(String),
}

/// Debouncing, supersede-safe front end to the backend search endpoint.
///
/// Cheaply cloneable; all clones share one generation counter and state
/// channel, so submissions from any clone supersede each other.
#[derive(Clone)]
pub struct SearchAggregator<B> {
    inner: Arc<AggregatorInner<B>>,
}

struct AggregatorInner<B> {
    backend: B,
    debounce: Duration,
    /// Current submission generation. A submission owns the search only
    /// while this still holds its generation.
    generation: AtomicU64,
    state: watch::Sender<SearchState>,
}

impl<B: SearchBackend> SearchAggregator<B> {
    /// Create a new aggregator over `backend`.
    #[must_use]
    pub fn new(backend: B, debounce: Duration) -> Self {
        let (state, _) = watch::channel(SearchState::Idle);
        Self {
            inner: Arc::new(AggregatorInner {
                backend,
                debounce,
                generation: AtomicU64::new(0),
                state,
            }),
        }
    }

    /// Subscribe to state transitions.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.inner.state.subscribe()
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> SearchState {
        self.inner.state.borrow().clone()
    }

    /// Force the aggregator back to `Idle`, clearing results.
    ///
    /// Any in-flight submission becomes stale and will be discarded when it
    /// lands (the Escape/blur path).
    pub fn reset(&self) {
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        self.inner.state.send_replace(SearchState::Idle);
    }

    /// Submit a query.
    ///
    /// The submission waits out the debounce window; if a newer submission
    /// arrives meanwhile, it resolves `Superseded` without a backend call.
    /// After the backend responds, the generation is re-checked so an
    /// out-of-order response can never overwrite newer results.
    ///
    /// An empty (or whitespace) query resets to `Idle` and resolves with
    /// empty results immediately.
    #[instrument(skip(self), fields(query = %raw_query))]
    pub async fn query(&self, raw_query: &str, limit: Option<u32>) -> SearchOutcome {
        let query = raw_query.trim().to_string();
        if query.is_empty() {
            self.reset();
            return SearchOutcome::Results(SearchBuckets::default());
        }

        let limit = limit
            .unwrap_or(DEFAULT_BUCKET_LIMIT)
            .clamp(1, MAX_BUCKET_LIMIT);

        // Claim a new generation; every older submission is now stale.
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.state.send_replace(SearchState::Debouncing {
            query: query.clone(),
        });

        tokio::time::sleep(self.inner.debounce).await;

        if self.inner.generation.load(Ordering::SeqCst) != generation {
            debug!("Query superseded during debounce window");
            return SearchOutcome::Superseded;
        }

        self.inner.state.send_replace(SearchState::Searching {
            query: query.clone(),
        });

        let result = self.inner.backend.search(&query, limit).await;

        // Re-check after the response: a slower request must not clobber a
        // newer one that already published.
        if self.inner.generation.load(Ordering::SeqCst) != generation {
            debug!("Query superseded while in flight, discarding response");
            return SearchOutcome::Superseded;
        }

        match result {
            Ok(hits) => {
                let buckets = SearchBuckets::group(hits, limit as usize);
                self.inner.state.send_replace(SearchState::Results {
                    query,
                    buckets: buckets.clone(),
                });
                SearchOutcome::Results(buckets)
            }
            Err(e) => {
                let message = e.to_string();
                self.inner.state.send_replace(SearchState::Error {
                    query,
                    message: message.clone(),
                });
                SearchOutcome::Failed(message)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn hit(kind: SearchHitKind, id: &str) -> SearchHit {
        SearchHit {
            id: id.to_string(),
            kind,
            title: id.to_string(),
            description: String::new(),
            url: format!("/{id}"),
            metadata: serde_json::Value::Null,
        }
    }

    /// Backend that records queries and can delay per-query.
    struct RecordingBackend {
        calls: Mutex<Vec<String>>,
        /// Queries that should stall this long before responding.
        slow_query: Option<(String, Duration)>,
        fail: bool,
    }

    impl RecordingBackend {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                slow_query: None,
                fail: false,
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl SearchBackend for Arc<RecordingBackend> {
        async fn search(&self, query: &str, _limit: u32) -> Result<Vec<SearchHit>, ApiError> {
            self.calls.lock().unwrap().push(query.to_string());

            if let Some((slow, delay)) = &self.slow_query
                && slow == query
            {
                tokio::time::sleep(*delay).await;
            }

            if self.fail {
                return Err(ApiError::Api {
                    status: 500,
                    message: "search unavailable".to_string(),
                });
            }

            Ok(vec![hit(SearchHitKind::Product, &format!("hit-{query}"))])
        }
    }

    const DEBOUNCE: Duration = Duration::from_millis(300);

    #[test]
    fn test_group_preserves_order_within_buckets() {
        let hits = vec![
            hit(SearchHitKind::Order, "o1"),
            hit(SearchHitKind::Product, "p1"),
            hit(SearchHitKind::Order, "o2"),
            hit(SearchHitKind::User, "u1"),
            hit(SearchHitKind::Order, "o3"),
        ];

        let buckets = SearchBuckets::group(hits, 10);
        let order_ids: Vec<&str> = buckets.orders.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(order_ids, vec!["o1", "o2", "o3"]);
        assert_eq!(buckets.products.len(), 1);
        assert_eq!(buckets.users.len(), 1);
        assert!(buckets.notifications.is_empty());
        assert_eq!(buckets.total(), 5);
    }

    #[test]
    fn test_group_caps_per_bucket() {
        let hits = (0..10)
            .map(|i| hit(SearchHitKind::Order, &format!("o{i}")))
            .collect();
        let buckets = SearchBuckets::group(hits, 3);
        assert_eq!(buckets.orders.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_typing_triggers_one_backend_call() {
        let backend = Arc::new(RecordingBackend::new());
        let agg = SearchAggregator::new(Arc::clone(&backend), DEBOUNCE);

        // Three keystrokes 100ms apart, all inside the debounce window
        let a = tokio::spawn({
            let agg = agg.clone();
            async move { agg.query("a", None).await }
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
        let ab = tokio::spawn({
            let agg = agg.clone();
            async move { agg.query("ab", None).await }
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
        let abc = tokio::spawn({
            let agg = agg.clone();
            async move { agg.query("abc", None).await }
        });

        assert!(matches!(a.await.unwrap(), SearchOutcome::Superseded));
        assert!(matches!(ab.await.unwrap(), SearchOutcome::Superseded));
        assert!(matches!(abc.await.unwrap(), SearchOutcome::Results(_)));

        // Only the final keystroke reached the backend
        assert_eq!(backend.calls(), vec!["abc".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_order_response_is_discarded() {
        let mut backend = RecordingBackend::new();
        backend.slow_query = Some(("slow".to_string(), Duration::from_secs(10)));
        let backend = Arc::new(backend);
        let agg = SearchAggregator::new(Arc::clone(&backend), DEBOUNCE);

        // First query survives its debounce window and goes in-flight (slow)
        let slow = tokio::spawn({
            let agg = agg.clone();
            async move { agg.query("slow", None).await }
        });
        tokio::time::sleep(Duration::from_millis(400)).await;

        // Second query lands while the first is still in flight
        let fast = agg.query("fast", None).await;
        assert!(matches!(fast, SearchOutcome::Results(_)));

        // The slow response arrives later and must be discarded
        assert!(matches!(slow.await.unwrap(), SearchOutcome::Superseded));

        // Newer results were not clobbered
        match agg.state() {
            SearchState::Results { query, .. } => assert_eq!(query, "fast"),
            other => panic!("expected results for 'fast', got {other:?}"),
        }

        // Both queries did reach the backend - supersede discards, it does
        // not cancel
        assert_eq!(backend.calls(), vec!["slow".to_string(), "fast".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_query_resets_to_idle() {
        let backend = Arc::new(RecordingBackend::new());
        let agg = SearchAggregator::new(Arc::clone(&backend), DEBOUNCE);

        let outcome = agg.query("   ", None).await;
        match outcome {
            SearchOutcome::Results(buckets) => assert!(buckets.is_empty()),
            other => panic!("expected empty results, got {other:?}"),
        }
        assert!(matches!(agg.state(), SearchState::Idle));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_backend_failure_surfaces_message() {
        let mut backend = RecordingBackend::new();
        backend.fail = true;
        let agg = SearchAggregator::new(Arc::new(backend), DEBOUNCE);

        let outcome = agg.query("linen", None).await;
        match outcome {
            SearchOutcome::Failed(message) => {
                assert!(message.contains("search unavailable"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert!(matches!(agg.state(), SearchState::Error { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_supersedes_in_flight_query() {
        let mut backend = RecordingBackend::new();
        backend.slow_query = Some(("slow".to_string(), Duration::from_secs(10)));
        let agg = SearchAggregator::new(Arc::new(backend), DEBOUNCE);

        let slow = tokio::spawn({
            let agg = agg.clone();
            async move { agg.query("slow", None).await }
        });
        tokio::time::sleep(Duration::from_millis(400)).await;

        // Escape pressed: back to idle, in-flight result must not publish
        agg.reset();
        assert!(matches!(agg.state(), SearchState::Idle));
        assert!(matches!(slow.await.unwrap(), SearchOutcome::Superseded));
        assert!(matches!(agg.state(), SearchState::Idle));
    }
}

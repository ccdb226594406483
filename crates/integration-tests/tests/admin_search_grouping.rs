//! Integration tests for global search grouping and the debounce contract.
//!
//! The aggregator promises: rapid submissions coalesce into one backend
//! call, superseded submissions never publish, and the flat backend hit
//! list partitions into typed buckets preserving order.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use kawane_admin::api::ApiError;
use kawane_admin::api::types::{SearchHit, SearchHitKind};
use kawane_admin::services::search::{
    SearchAggregator, SearchBackend, SearchBuckets, SearchOutcome, SearchState,
};

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

/// Backend double that records queries and answers one product hit each.
#[derive(Default)]
struct CountingBackend {
    calls: Mutex<Vec<String>>,
}

/// Shared handle to a `CountingBackend`. A local newtype is required because
/// `SearchBackend` is foreign to this crate, so the blanket `Arc` impl used by
/// the admin crate's own tests would violate the orphan rule here.
#[derive(Clone)]
struct SharedBackend(Arc<CountingBackend>);

impl SearchBackend for SharedBackend {
    async fn search(&self, query: &str, _limit: u32) -> Result<Vec<SearchHit>, ApiError> {
        self.0
            .calls
            .lock()
            .expect("lock poisoned")
            .push(query.to_string());
        Ok(vec![hit(SearchHitKind::Product, query)])
    }
}

const DEBOUNCE: Duration = Duration::from_millis(300);

// =============================================================================
// Bucket Grouping
// =============================================================================

#[test]
fn test_grouping_partitions_by_kind() {
    let hits = vec![
        hit(SearchHitKind::Order, "o1"),
        hit(SearchHitKind::User, "u1"),
        hit(SearchHitKind::Product, "p1"),
        hit(SearchHitKind::Notification, "n1"),
        hit(SearchHitKind::Order, "o2"),
    ];

    let buckets = SearchBuckets::group(hits, 10);
    assert_eq!(buckets.orders.len(), 2);
    assert_eq!(buckets.products.len(), 1);
    assert_eq!(buckets.users.len(), 1);
    assert_eq!(buckets.notifications.len(), 1);
    assert_eq!(buckets.total(), 5);
}

#[test]
fn test_grouping_keeps_backend_order_within_bucket() {
    let hits = vec![
        hit(SearchHitKind::User, "best-match"),
        hit(SearchHitKind::User, "second"),
        hit(SearchHitKind::User, "third"),
    ];

    let buckets = SearchBuckets::group(hits, 10);
    let ids: Vec<&str> = buckets.users.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec!["best-match", "second", "third"]);
}

#[test]
fn test_grouping_respects_bucket_limit() {
    let hits = (0..8)
        .map(|i| hit(SearchHitKind::Notification, &format!("n{i}")))
        .collect();

    let buckets = SearchBuckets::group(hits, 2);
    assert_eq!(buckets.notifications.len(), 2);
    assert!(buckets.orders.is_empty());
}

// =============================================================================
// Debounce / Supersede
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_typing_a_ab_abc_hits_backend_once() {
    let backend = Arc::new(CountingBackend::default());
    let agg = SearchAggregator::new(SharedBackend(Arc::clone(&backend)), DEBOUNCE);

    let first = tokio::spawn({
        let agg = agg.clone();
        async move { agg.query("a", None).await }
    });
    tokio::time::sleep(Duration::from_millis(120)).await;

    let second = tokio::spawn({
        let agg = agg.clone();
        async move { agg.query("ab", None).await }
    });
    tokio::time::sleep(Duration::from_millis(120)).await;

    let third = agg.query("abc", None).await;

    assert!(matches!(
        first.await.expect("task"),
        SearchOutcome::Superseded
    ));
    assert!(matches!(
        second.await.expect("task"),
        SearchOutcome::Superseded
    ));
    assert!(matches!(third, SearchOutcome::Results(_)));

    assert_eq!(
        *backend.calls.lock().expect("lock poisoned"),
        vec!["abc".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn test_pause_between_keystrokes_issues_both_queries() {
    let backend = Arc::new(CountingBackend::default());
    let agg = SearchAggregator::new(SharedBackend(Arc::clone(&backend)), DEBOUNCE);

    let first = agg.query("linen", None).await;
    assert!(matches!(first, SearchOutcome::Results(_)));

    // Beyond the debounce window, so this is a fresh search
    tokio::time::sleep(Duration::from_millis(500)).await;
    let second = agg.query("linen shirt", None).await;
    assert!(matches!(second, SearchOutcome::Results(_)));

    assert_eq!(
        *backend.calls.lock().expect("lock poisoned"),
        vec!["linen".to_string(), "linen shirt".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn test_state_machine_reaches_results_then_resets() {
    let backend = Arc::new(CountingBackend::default());
    let agg = SearchAggregator::new(SharedBackend(Arc::clone(&backend)), DEBOUNCE);

    let outcome = agg.query("tote", None).await;
    assert!(matches!(outcome, SearchOutcome::Results(_)));
    assert!(matches!(agg.state(), SearchState::Results { .. }));

    // Escape / blur
    agg.reset();
    assert!(matches!(agg.state(), SearchState::Idle));
}

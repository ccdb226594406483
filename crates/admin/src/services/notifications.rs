//! Background notification polling.
//!
//! A detached task fetches the first page of notifications on an interval
//! (default 30s) and publishes a snapshot through a watch channel. The badge
//! count is derived from the fetched page: the number of notifications with
//! `is_read == false`. Routes read the snapshot instead of hitting the
//! backend per request; mark-read mutations trigger an immediate re-poll.
//!
//! Poll failures keep the previous snapshot - a stale badge beats a
//! flapping one.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use crate::api::types::{ListParams, Notification, Page};
use crate::api::{AdminApi, ApiError};

/// How many notifications each poll fetches.
const POLL_PAGE_SIZE: u32 = 20;

/// Seam over the backend notification list so the poller can be driven by a
/// mock in tests.
pub trait NotificationSource: Send + Sync + 'static {
    /// Fetch the newest notifications.
    fn recent(
        &self,
        per_page: u32,
    ) -> impl Future<Output = Result<Page<Notification>, ApiError>> + Send;
}

impl NotificationSource for AdminApi {
    async fn recent(&self, per_page: u32) -> Result<Page<Notification>, ApiError> {
        self.list_notifications(&ListParams {
            page: Some(1),
            per_page: Some(per_page),
            query: None,
        })
        .await
    }
}

/// Point-in-time view of the notification feed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSnapshot {
    /// Number of unread notifications in the fetched page.
    pub unread: u64,
    /// The fetched page, newest first.
    pub latest: Vec<Notification>,
    /// When this snapshot was taken; `None` until the first successful poll.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl NotificationSnapshot {
    fn from_page(page: Page<Notification>) -> Self {
        let unread = page.items.iter().filter(|n| !n.is_read).count() as u64;
        Self {
            unread,
            latest: page.items,
            fetched_at: Some(Utc::now()),
        }
    }
}

/// Handle to the notification poller.
///
/// Cheaply cloneable; all clones observe the same snapshot.
#[derive(Clone)]
pub struct NotificationFeed {
    inner: Arc<FeedInner>,
}

struct FeedInner {
    snapshot: watch::Receiver<NotificationSnapshot>,
    refresh: mpsc::Sender<()>,
}

impl NotificationFeed {
    /// Spawn the polling task and return a handle to its snapshots.
    ///
    /// The task is detached; it runs until the process exits.
    #[must_use]
    pub fn spawn<S: NotificationSource>(source: S, interval: std::time::Duration) -> Self {
        let (snapshot_tx, snapshot_rx) = watch::channel(NotificationSnapshot::default());
        // Capacity 1: coalesce refresh bursts into a single poll
        let (refresh_tx, refresh_rx) = mpsc::channel(1);

        tokio::spawn(poll_loop(source, interval, snapshot_tx, refresh_rx));

        Self {
            inner: Arc::new(FeedInner {
                snapshot: snapshot_rx,
                refresh: refresh_tx,
            }),
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> NotificationSnapshot {
        self.inner.snapshot.borrow().clone()
    }

    /// Unread badge count.
    #[must_use]
    pub fn unread_count(&self) -> u64 {
        self.inner.snapshot.borrow().unread
    }

    /// Ask the poller to re-fetch immediately (after a mark-read mutation).
    ///
    /// Best-effort: if a refresh is already queued this is a no-op.
    pub fn refresh_now(&self) {
        let _ = self.inner.refresh.try_send(());
    }
}

/// The polling loop: tick on the interval or on an explicit refresh.
async fn poll_loop<S: NotificationSource>(
    source: S,
    interval: std::time::Duration,
    snapshot_tx: watch::Sender<NotificationSnapshot>,
    mut refresh_rx: mpsc::Receiver<()>,
) {
    let mut ticker = tokio::time::interval(interval);
    // A delayed poll should run once, not replay missed ticks
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            message = refresh_rx.recv() => {
                if message.is_none() {
                    // All handles dropped; nobody is watching anymore
                    debug!("Notification feed handles dropped, stopping poller");
                    return;
                }
            }
        }

        match source.recent(POLL_PAGE_SIZE).await {
            Ok(page) => {
                let snapshot = NotificationSnapshot::from_page(page);
                debug!(unread = snapshot.unread, "Notification poll completed");
                snapshot_tx.send_replace(snapshot);
            }
            Err(e) => {
                // Keep the previous snapshot; transient backend trouble
                // should not blank the badge
                warn!("Notification poll failed: {e}");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use kawane_core::{NotificationId, NotificationPriority, NotificationType};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    fn notification(id: &str, is_read: bool) -> Notification {
        Notification {
            id: NotificationId::new(id),
            title: format!("Order {id}"),
            message: "New order received".to_string(),
            notification_type: NotificationType::OrderCreated,
            priority: NotificationPriority::Normal,
            is_read,
            metadata: serde_json::Value::Null,
            created_at: Utc::now(),
        }
    }

    /// Source that serves a queue of canned responses, then repeats the last.
    struct ScriptedSource {
        responses: Mutex<Vec<Result<Vec<Notification>, ()>>>,
        polls: AtomicU32,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<Vec<Notification>, ()>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses),
                polls: AtomicU32::new(0),
            })
        }
    }

    impl NotificationSource for Arc<ScriptedSource> {
        async fn recent(&self, per_page: u32) -> Result<Page<Notification>, ApiError> {
            self.polls.fetch_add(1, Ordering::SeqCst);

            let mut responses = self.responses.lock().unwrap();
            let next = if responses.len() > 1 {
                responses.remove(0)
            } else {
                responses.first().cloned().unwrap_or(Ok(Vec::new()))
            };
            drop(responses);

            match next {
                Ok(items) => Ok(Page {
                    total: items.len() as u64,
                    items,
                    page: 1,
                    per_page,
                }),
                Err(()) => Err(ApiError::Api {
                    status: 502,
                    message: "backend down".to_string(),
                }),
            }
        }
    }

    const INTERVAL: Duration = Duration::from_secs(30);

    #[tokio::test(start_paused = true)]
    async fn test_badge_counts_unread_in_fetched_page() {
        let source = ScriptedSource::new(vec![Ok(vec![
            notification("n1", false),
            notification("n2", true),
            notification("n3", false),
        ])]);
        let feed = NotificationFeed::spawn(Arc::clone(&source), INTERVAL);

        // First tick fires immediately; give the task a chance to run it
        tokio::time::sleep(Duration::from_millis(10)).await;

        let snapshot = feed.snapshot();
        assert_eq!(snapshot.unread, 2);
        assert_eq!(snapshot.latest.len(), 3);
        assert!(snapshot.fetched_at.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_failure_keeps_previous_snapshot() {
        let source = ScriptedSource::new(vec![
            Ok(vec![notification("n1", false)]),
            Err(()),
        ]);
        let feed = NotificationFeed::spawn(Arc::clone(&source), INTERVAL);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(feed.unread_count(), 1);

        // Next tick fails; the previous snapshot must survive
        tokio::time::sleep(INTERVAL + Duration::from_millis(10)).await;
        assert!(source.polls.load(Ordering::SeqCst) >= 2);
        assert_eq!(feed.unread_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_now_polls_between_ticks() {
        let source = ScriptedSource::new(vec![
            Ok(vec![notification("n1", false)]),
            Ok(Vec::new()),
        ]);
        let feed = NotificationFeed::spawn(Arc::clone(&source), INTERVAL);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(feed.unread_count(), 1);

        // Mark-read happened: refresh without waiting for the next tick
        feed.refresh_now();
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(source.polls.load(Ordering::SeqCst), 2);
        assert_eq!(feed.unread_count(), 0);
    }
}

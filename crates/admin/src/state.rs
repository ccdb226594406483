//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::api::AdminApi;
use crate::config::AdminConfig;
use crate::services::{NotificationFeed, SearchAggregator};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// backend client plus the long-lived services built on top of it.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    pool: PgPool,
    api: AdminApi,
    search: SearchAggregator<AdminApi>,
    notifications: NotificationFeed,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Spawns the notification poller; must be called inside a tokio runtime.
    #[must_use]
    pub fn new(config: AdminConfig, pool: PgPool) -> Self {
        let api = AdminApi::new(&config.api);
        let search = SearchAggregator::new(api.clone(), config.search_debounce);
        let notifications = NotificationFeed::spawn(api.clone(), config.notification_poll_interval);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                api,
                search,
                notifications,
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the Kawane backend API client.
    #[must_use]
    pub fn api(&self) -> &AdminApi {
        &self.inner.api
    }

    /// Get a reference to the global search aggregator.
    #[must_use]
    pub fn search(&self) -> &SearchAggregator<AdminApi> {
        &self.inner.search
    }

    /// Get a reference to the notification feed.
    #[must_use]
    pub fn notifications(&self) -> &NotificationFeed {
        &self.inner.notifications
    }
}

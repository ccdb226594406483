//! Back-office services: search aggregation, notification polling, exports.

pub mod export;
pub mod notifications;
pub mod search;

pub use notifications::{NotificationFeed, NotificationSnapshot};
pub use search::{SearchAggregator, SearchBuckets, SearchOutcome, SearchState};

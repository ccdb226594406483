//! Integration tests for Kawane Studio.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p kawane-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `admin_search_grouping` - Search bucket partitioning and the
//!   debounce/supersede contract of the aggregator
//! - `admin_csv_export` - CSV field escaping and document layout
//! - `storefront_checkout_validation` - Shipping form validation contract
//! - `order_affordances` - Status gating for cancel buttons and deal pricing
//!
//! These tests exercise the public library surface of the two service
//! crates; nothing here talks to a live backend or database.

//! Session-backed models for the admin panel.

pub mod session;

pub use session::{CurrentStaff, session_keys};

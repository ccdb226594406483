//! HTTP middleware for the admin panel.

mod auth;
mod session;

pub use auth::{RequireAdmin, RequireStaff, clear_current_staff, set_current_staff};
pub use session::create_session_layer;

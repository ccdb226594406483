//! Admin user types.

use chrono::{DateTime, Utc};
use kawane_core::{UserId, UserRole};
use serde::{Deserialize, Serialize};

/// A user account as seen from the back-office.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub order_count: u32,
}

//! Session keys and the in-session staff mirror.

use kawane_core::{UserId, UserRole};
use serde::{Deserialize, Serialize};

/// Session storage keys.
pub mod session_keys {
    /// Backend-issued bearer token for the logged-in staff member.
    pub const STAFF_TOKEN: &str = "staff_token";
    /// Compact mirror of the logged-in staff member.
    pub const CURRENT_STAFF: &str = "current_staff";
}

/// The logged-in staff member as stored in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentStaff {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl CurrentStaff {
    /// Whether this staff member may manage users and destructive CRUD.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.can_manage_users()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin_by_role() {
        let staff = CurrentStaff {
            id: UserId::new("cku1"),
            name: "Raka".to_string(),
            email: "raka@kawane.studio".to_string(),
            role: UserRole::Staff,
        };
        assert!(!staff.is_admin());

        let admin = CurrentStaff {
            role: UserRole::Admin,
            ..staff
        };
        assert!(admin.is_admin());
    }
}

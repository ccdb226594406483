//! Session keys and the in-session user mirror.
//!
//! The session is the durable analogue of browser local storage: it holds
//! the backend-issued bearer token, the guest cart token, and a compact
//! mirror of the logged-in user for display. The backend remains the source
//! of truth for all of it.

use kawane_core::{UserId, UserRole};
use serde::{Deserialize, Serialize};

use crate::api::types::User;

/// Session storage keys.
pub mod session_keys {
    /// Backend-issued bearer token for the logged-in user.
    pub const AUTH_TOKEN: &str = "auth_token";
    /// Compact mirror of the logged-in user.
    pub const CURRENT_USER: &str = "current_user";
    /// Backend-issued guest cart token.
    pub const CART_TOKEN: &str = "cart_token";
}

/// The logged-in user as stored in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_verified: bool,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
            role: user.role,
            is_verified: user.is_verified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kawane_core::Email;

    #[test]
    fn test_current_user_from_api_user() {
        let user = User {
            id: UserId::new("cku1"),
            name: "Dewi".to_string(),
            email: Email::parse("dewi@kawane.studio").expect("valid email"),
            role: UserRole::Customer,
            is_verified: true,
        };

        let current = CurrentUser::from(&user);
        assert_eq!(current.email, "dewi@kawane.studio");
        assert_eq!(current.role, UserRole::Customer);
    }
}

//! Session-scoped models.

use serde::{Deserialize, Serialize};

/// Session storage keys.
pub mod session_keys {
    /// Key under which the authenticated admin is stored. Present in the
    /// session exactly when the session is authenticated.
    pub const CURRENT_ADMIN: &str = "current_admin";
}

/// The authenticated admin for the current session.
///
/// The session gate has two states: anonymous (no entry under
/// [`session_keys::CURRENT_ADMIN`]) and authenticated (this struct stored
/// there). Only login and logout move between the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    pub username: String,
}

//! Shared helpers for the end-to-end tests.
//!
//! The tests in `tests/` talk to a running server over HTTP. Start one with:
//!
//! ```text
//! IMPEX_ADMIN_USERNAME=admin IMPEX_ADMIN_PASSWORD=test-password \
//!     cargo run -p impex-server
//! ```
//!
//! then run `cargo test -p impex-integration-tests -- --ignored`.

/// Base URL of the server under test (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("IMPEX_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Admin username matching the server's configuration.
#[must_use]
pub fn admin_username() -> String {
    std::env::var("IMPEX_ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string())
}

/// Admin password matching the server's configuration.
#[must_use]
pub fn admin_password() -> String {
    std::env::var("IMPEX_ADMIN_PASSWORD").unwrap_or_else(|_| "test-password".to_string())
}

//! Middleware for the LendVault API
//!
//! Request logging and security headers. CORS is configured in the
//! binary from the environment.

mod security;
mod tracing;

pub use security::security_headers;
pub use tracing::request_tracing;

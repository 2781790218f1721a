//! Route definitions for the LendVault API

use axum::{routing::get, Router};

use crate::error::ApiError;
use crate::handlers::{health_check, root};
use crate::state::AppState;

mod loan;

pub use loan::loan_application_routes;

/// Assemble the full application router. Shared between the binary and
/// the integration tests so both serve identical routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(loan_application_routes())
        .fallback(not_found)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Resource not found".to_string())
}

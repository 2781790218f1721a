//! Loan application route definitions

use axum::Router;

use crate::handlers::{create_loan_application, get_loan_application};
use crate::state::AppState;

pub fn loan_application_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/loan-applications",
            axum::routing::post(create_loan_application),
        )
        .route(
            "/api/loan-applications/:id",
            axum::routing::get(get_loan_application),
        )
}

//! API handlers for the LendVault backend

mod health;
mod loan;

pub use health::{health_check, root, HealthResponse};
pub use loan::{create_loan_application, get_loan_application};

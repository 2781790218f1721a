//! Storage capability for the LendVault backend
//!
//! The service core talks to persistence through the [`LoanStore`] trait:
//! a keyed customer lookup, a loan-application insert, and a joined
//! loan-application read. [`PgLoanStore`] backs it with Postgres;
//! [`MemoryLoanStore`] backs it with process memory for tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Customer, LoanApplication, LoanApplicationWithCustomer, NewLoanApplication};

mod memory;
mod postgres;

pub use memory::MemoryLoanStore;
pub use postgres::PgLoanStore;

/// Store error type
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store operation failed: {message}")]
    Operation { message: String },
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Operation {
            message: err.to_string(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Data-store operations the loan-application core depends on.
///
/// Customers are read-only through this interface; loan applications are
/// write-once. The store assigns ids and timestamps and applies the
/// `PENDING` status on insert.
#[async_trait]
pub trait LoanStore: Send + Sync {
    /// Look up a customer by id.
    async fn find_customer_by_id(&self, id: i64) -> StoreResult<Option<Customer>>;

    /// Insert a new loan application and return the stored record.
    async fn create_loan_application(
        &self,
        record: NewLoanApplication,
    ) -> StoreResult<LoanApplication>;

    /// Look up a loan application by id, joined with its customer.
    async fn find_loan_application_by_id(
        &self,
        id: i64,
    ) -> StoreResult<Option<LoanApplicationWithCustomer>>;

    /// Probe the backing store (used by the health endpoint).
    async fn health_check(&self) -> StoreResult<()>;
}

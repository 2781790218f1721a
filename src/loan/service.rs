//! Loan application service - orchestrates customer lookup, repayment
//! pricing, and persistence

use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::loan::calculator::monthly_repayment;
use crate::models::{
    CreateLoanApplication, LoanApplication, LoanApplicationWithCustomer, NewLoanApplication,
};
use crate::store::LoanStore;

/// Service for creating and reading loan applications
#[derive(Clone)]
pub struct LoanApplicationService {
    store: Arc<dyn LoanStore>,
}

impl LoanApplicationService {
    pub fn new(store: Arc<dyn LoanStore>) -> Self {
        Self { store }
    }

    /// Create a loan application for an existing customer.
    ///
    /// The customer lookup and the insert are two independent store calls;
    /// a customer deleted in between surfaces as a store error.
    pub async fn create(&self, command: CreateLoanApplication) -> ApiResult<LoanApplication> {
        self.store
            .find_customer_by_id(command.customer_id)
            .await?
            .ok_or(ApiError::NotFound("Customer not found".to_string()))?;

        let monthly_payment = monthly_repayment(
            command.amount,
            command.annual_interest_rate,
            command.term_months as u32,
        );

        let application = self
            .store
            .create_loan_application(NewLoanApplication {
                customer_id: command.customer_id,
                amount: command.amount,
                term_months: command.term_months,
                annual_interest_rate: command.annual_interest_rate,
                monthly_payment,
            })
            .await?;

        tracing::info!(
            "Created loan application {} for customer {}",
            application.id,
            application.customer_id
        );

        Ok(application)
    }

    /// Fetch a loan application by id, joined with its customer.
    pub async fn get_one(&self, id: i64) -> ApiResult<LoanApplicationWithCustomer> {
        let application = self
            .store
            .find_loan_application_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("Loan application not found".to_string()))?;

        Ok(application)
    }
}

//! Data models for the LendVault backend

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};

/// Customer model. Customers are read-only to this service; their
/// lifecycle is owned by the store (see the seed migration).
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The customer fields exposed when nested inside a loan application.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CustomerSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<Customer> for CustomerSummary {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
        }
    }
}

/// Loan application status. Only `Pending` is ever written by this
/// service; the other values exist in the schema for later workflows.
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "loan_application_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum LoanStatus {
    Pending,
    Approved,
    Rejected,
}

/// Loan application model
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct LoanApplication {
    pub id: i64,
    pub customer_id: i64,
    pub amount: f64,
    pub term_months: i32,
    pub annual_interest_rate: f64,
    pub monthly_payment: f64,
    pub status: LoanStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Loan application joined with its customer
#[derive(Debug, Serialize, Clone)]
pub struct LoanApplicationWithCustomer {
    #[serde(flatten)]
    pub application: LoanApplication,
    pub customer: CustomerSummary,
}

/// Sanitized create command produced by the validator. Every field has
/// passed coercion and range checks; the interest rate default is already
/// applied.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateLoanApplication {
    pub customer_id: i64,
    pub amount: f64,
    pub term_months: i32,
    pub annual_interest_rate: f64,
}

/// Record handed to the store on create: the sanitized command plus the
/// computed repayment. Id, status and timestamps are store-assigned.
#[derive(Debug, Clone)]
pub struct NewLoanApplication {
    pub customer_id: i64,
    pub amount: f64,
    pub term_months: i32,
    pub annual_interest_rate: f64,
    pub monthly_payment: f64,
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

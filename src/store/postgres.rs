//! Postgres-backed loan store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::{
    Customer, CustomerSummary, LoanApplication, LoanApplicationWithCustomer, LoanStatus,
    NewLoanApplication,
};
use crate::store::{LoanStore, StoreResult};

/// Loan store backed by a Postgres connection pool
#[derive(Clone)]
pub struct PgLoanStore {
    pool: PgPool,
}

impl PgLoanStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Flat row shape for the application-with-customer join; the customer
/// columns are aliased to keep them apart from the application's own.
#[derive(sqlx::FromRow)]
struct ApplicationCustomerRow {
    id: i64,
    customer_id: i64,
    amount: f64,
    term_months: i32,
    annual_interest_rate: f64,
    monthly_payment: f64,
    status: LoanStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    customer_first_name: String,
    customer_last_name: String,
    customer_email: String,
}

impl From<ApplicationCustomerRow> for LoanApplicationWithCustomer {
    fn from(row: ApplicationCustomerRow) -> Self {
        LoanApplicationWithCustomer {
            application: LoanApplication {
                id: row.id,
                customer_id: row.customer_id,
                amount: row.amount,
                term_months: row.term_months,
                annual_interest_rate: row.annual_interest_rate,
                monthly_payment: row.monthly_payment,
                status: row.status,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            customer: CustomerSummary {
                id: row.customer_id,
                first_name: row.customer_first_name,
                last_name: row.customer_last_name,
                email: row.customer_email,
            },
        }
    }
}

#[async_trait]
impl LoanStore for PgLoanStore {
    async fn find_customer_by_id(&self, id: i64) -> StoreResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(customer)
    }

    async fn create_loan_application(
        &self,
        record: NewLoanApplication,
    ) -> StoreResult<LoanApplication> {
        let application = sqlx::query_as::<_, LoanApplication>(
            r#"
            INSERT INTO loan_applications (
                customer_id, amount, term_months, annual_interest_rate,
                monthly_payment, status, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(record.customer_id)
        .bind(record.amount)
        .bind(record.term_months)
        .bind(record.annual_interest_rate)
        .bind(record.monthly_payment)
        .bind(LoanStatus::Pending)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(application)
    }

    async fn find_loan_application_by_id(
        &self,
        id: i64,
    ) -> StoreResult<Option<LoanApplicationWithCustomer>> {
        let row = sqlx::query_as::<_, ApplicationCustomerRow>(
            r#"
            SELECT la.id, la.customer_id, la.amount, la.term_months,
                   la.annual_interest_rate, la.monthly_payment, la.status,
                   la.created_at, la.updated_at,
                   c.first_name AS customer_first_name,
                   c.last_name AS customer_last_name,
                   c.email AS customer_email
            FROM loan_applications la
            JOIN customers c ON c.id = la.customer_id
            WHERE la.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(LoanApplicationWithCustomer::from))
    }

    async fn health_check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;

        Ok(())
    }
}

//! In-memory loan store used by tests and local experiments

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::models::{
    Customer, CustomerSummary, LoanApplication, LoanApplicationWithCustomer, LoanStatus,
    NewLoanApplication,
};
use crate::store::{LoanStore, StoreError, StoreResult};

/// Concurrent in-memory implementation of [`LoanStore`].
///
/// Behaves like the Postgres store where the service can tell the
/// difference: ids are assigned sequentially from 1, inserts reject a
/// `customer_id` that has no matching customer, and the joined read
/// returns `None` for unknown application ids.
pub struct MemoryLoanStore {
    customers: DashMap<i64, Customer>,
    applications: DashMap<i64, LoanApplication>,
    next_customer_id: AtomicI64,
    next_application_id: AtomicI64,
}

impl MemoryLoanStore {
    pub fn new() -> Self {
        Self {
            customers: DashMap::new(),
            applications: DashMap::new(),
            next_customer_id: AtomicI64::new(1),
            next_application_id: AtomicI64::new(1),
        }
    }

    /// Store with the same customer rows the database seeds carry.
    pub fn with_mock_customers() -> Self {
        let store = Self::new();
        store.seed_customer("David", "Beckham", "david.beckham@football.com");
        store.seed_customer("Wembley", "Stadium", "wembley.stadium@hall.com");
        store.seed_customer("Queen", "Elizabeth", "queen.elizabeth@royal.com");
        store.seed_customer("London", "Bridge", "london.bridge@sights.com");
        store
    }

    /// Insert a customer row, assigning the next id.
    pub fn seed_customer(&self, first_name: &str, last_name: &str, email: &str) -> Customer {
        let id = self.next_customer_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let customer = Customer {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.customers.insert(id, customer.clone());
        customer
    }

    /// Number of stored loan applications.
    pub fn application_count(&self) -> usize {
        self.applications.len()
    }
}

impl Default for MemoryLoanStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoanStore for MemoryLoanStore {
    async fn find_customer_by_id(&self, id: i64) -> StoreResult<Option<Customer>> {
        Ok(self.customers.get(&id).map(|entry| entry.clone()))
    }

    async fn create_loan_application(
        &self,
        record: NewLoanApplication,
    ) -> StoreResult<LoanApplication> {
        if !self.customers.contains_key(&record.customer_id) {
            return Err(StoreError::Operation {
                message: format!(
                    "insert into loan_applications violates foreign key: customer {} does not exist",
                    record.customer_id
                ),
            });
        }

        let id = self.next_application_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let application = LoanApplication {
            id,
            customer_id: record.customer_id,
            amount: record.amount,
            term_months: record.term_months,
            annual_interest_rate: record.annual_interest_rate,
            monthly_payment: record.monthly_payment,
            status: LoanStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.applications.insert(id, application.clone());

        Ok(application)
    }

    async fn find_loan_application_by_id(
        &self,
        id: i64,
    ) -> StoreResult<Option<LoanApplicationWithCustomer>> {
        let application = match self.applications.get(&id) {
            Some(entry) => entry.clone(),
            None => return Ok(None),
        };

        let customer = self
            .customers
            .get(&application.customer_id)
            .map(|entry| CustomerSummary::from(entry.clone()))
            .ok_or_else(|| StoreError::Operation {
                message: format!(
                    "loan application {} references missing customer {}",
                    id, application.customer_id
                ),
            })?;

        Ok(Some(LoanApplicationWithCustomer {
            application,
            customer,
        }))
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(customer_id: i64) -> NewLoanApplication {
        NewLoanApplication {
            customer_id,
            amount: 5000.0,
            term_months: 12,
            annual_interest_rate: 5.5,
            monthly_payment: 429.18,
        }
    }

    #[tokio::test]
    async fn assigns_sequential_ids_and_pending_status() {
        let store = MemoryLoanStore::new();
        let customer = store.seed_customer("Ada", "Lovelace", "ada@example.com");

        let first = store
            .create_loan_application(sample_record(customer.id))
            .await
            .unwrap();
        let second = store
            .create_loan_application(sample_record(customer.id))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.status, LoanStatus::Pending);
        assert_eq!(store.application_count(), 2);
    }

    #[tokio::test]
    async fn rejects_insert_for_unknown_customer() {
        let store = MemoryLoanStore::new();

        let result = store.create_loan_application(sample_record(42)).await;

        assert!(result.is_err());
        assert_eq!(store.application_count(), 0);
    }

    #[tokio::test]
    async fn joined_read_includes_customer_fields() {
        let store = MemoryLoanStore::with_mock_customers();
        let created = store
            .create_loan_application(sample_record(1))
            .await
            .unwrap();

        let found = store
            .find_loan_application_by_id(created.id)
            .await
            .unwrap()
            .expect("application should exist");

        assert_eq!(found.application.id, created.id);
        assert_eq!(found.customer.id, 1);
        assert_eq!(found.customer.first_name, "David");
        assert_eq!(found.customer.last_name, "Beckham");
    }

    #[tokio::test]
    async fn missing_application_reads_as_none() {
        let store = MemoryLoanStore::with_mock_customers();

        let found = store.find_loan_application_by_id(99).await.unwrap();

        assert!(found.is_none());
    }
}

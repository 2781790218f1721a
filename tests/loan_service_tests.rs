//! Loan Application Service Tests
//!
//! Exercise the service over the in-memory store: repayment pricing,
//! customer lookup failures, and joined reads.

use std::sync::Arc;

use lendvault_server::error::ApiError;
use lendvault_server::loan::LoanApplicationService;
use lendvault_server::models::{CreateLoanApplication, LoanStatus};
use lendvault_server::store::MemoryLoanStore;

fn service_with_store() -> (LoanApplicationService, Arc<MemoryLoanStore>) {
    let store = Arc::new(MemoryLoanStore::with_mock_customers());
    let service = LoanApplicationService::new(store.clone());
    (service, store)
}

fn command(customer_id: i64) -> CreateLoanApplication {
    CreateLoanApplication {
        customer_id,
        amount: 5000.0,
        term_months: 12,
        annual_interest_rate: 5.5,
    }
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_prices_monthly_payment() {
    let (service, _) = service_with_store();

    let application = service.create(command(1)).await.unwrap();

    assert_eq!(application.id, 1);
    assert_eq!(application.customer_id, 1);
    assert_eq!(application.amount, 5000.0);
    assert_eq!(application.term_months, 12);
    assert_eq!(application.annual_interest_rate, 5.5);
    assert_eq!(application.monthly_payment, 429.18);
    assert_eq!(application.status, LoanStatus::Pending);
}

#[tokio::test]
async fn test_create_zero_rate_divides_evenly() {
    let (service, _) = service_with_store();

    let application = service
        .create(CreateLoanApplication {
            customer_id: 2,
            amount: 12_000.0,
            term_months: 12,
            annual_interest_rate: 0.0,
        })
        .await
        .unwrap();

    assert_eq!(application.monthly_payment, 1000.0);
}

#[tokio::test]
async fn test_create_unknown_customer_persists_nothing() {
    let (service, store) = service_with_store();

    let result = service.create(command(99)).await;

    match result {
        Err(ApiError::NotFound(message)) => assert_eq!(message, "Customer not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert_eq!(store.application_count(), 0);
}

// ============================================================================
// Get one
// ============================================================================

#[tokio::test]
async fn test_get_one_returns_application_with_customer() {
    let (service, _) = service_with_store();
    let created = service.create(command(1)).await.unwrap();

    let found = service.get_one(created.id).await.unwrap();

    assert_eq!(found.application.id, created.id);
    assert_eq!(found.application.monthly_payment, 429.18);
    assert_eq!(found.customer.id, 1);
    assert_eq!(found.customer.first_name, "David");
    assert_eq!(found.customer.last_name, "Beckham");
    assert_eq!(found.customer.email, "david.beckham@football.com");
}

#[tokio::test]
async fn test_get_one_is_idempotent() {
    let (service, _) = service_with_store();
    let created = service.create(command(1)).await.unwrap();

    let first = service.get_one(created.id).await.unwrap();
    let second = service.get_one(created.id).await.unwrap();

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[tokio::test]
async fn test_get_one_unknown_application() {
    let (service, _) = service_with_store();

    let result = service.get_one(42).await;

    match result {
        Err(ApiError::NotFound(message)) => assert_eq!(message, "Loan application not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

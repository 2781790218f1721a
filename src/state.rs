//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::loan::LoanApplicationService;
use crate::store::LoanStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub loan_service: Arc<LoanApplicationService>,
    pub store: Arc<dyn LoanStore>,
}

impl AppState {
    /// Build the state for a given store, wiring the service to it.
    pub fn new(store: Arc<dyn LoanStore>) -> Self {
        Self {
            loan_service: Arc::new(LoanApplicationService::new(store.clone())),
            store,
        }
    }
}

impl FromRef<AppState> for Arc<LoanApplicationService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.loan_service.clone()
    }
}

impl FromRef<AppState> for Arc<dyn LoanStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

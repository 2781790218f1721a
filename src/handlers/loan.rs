//! Loan application handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::error::ApiError;
use crate::loan::validation::validate_create_request;
use crate::loan::LoanApplicationService;
use crate::models::{ApiResponse, LoanApplication, LoanApplicationWithCustomer};

/// Create a loan application.
///
/// The body is taken as raw JSON so numeric fields submitted as strings
/// can be coerced during validation.
pub async fn create_loan_application(
    State(service): State<Arc<LoanApplicationService>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<ApiResponse<LoanApplication>>), ApiError> {
    let command = validate_create_request(&body)?;
    let application = service.create(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            success: true,
            data: Some(application),
            error: None,
        }),
    ))
}

/// Fetch a loan application by id, with its customer embedded.
pub async fn get_loan_application(
    State(service): State<Arc<LoanApplicationService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<LoanApplicationWithCustomer>>, ApiError> {
    let application = service.get_one(id).await?;

    Ok(Json(ApiResponse {
        success: true,
        data: Some(application),
        error: None,
    }))
}

//! Loan application domain: repayment math, request validation, and the
//! service that ties them to the store.

pub mod calculator;
pub mod service;
pub mod validation;

pub use service::LoanApplicationService;

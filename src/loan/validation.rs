//! Validation of loan-application create requests
//!
//! Numeric fields are accepted either as JSON numbers or as numeric
//! strings, so validation works on the raw `serde_json::Value` instead of
//! a typed deserialization. Fields are checked in schema order, each
//! violated field contributes one message, and all of them are reported
//! together.

use serde_json::Value;

use crate::models::CreateLoanApplication;

/// Largest f64 magnitude that still identifies an exact integer (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

const KNOWN_FIELDS: [&str; 4] = [
    "customer_id",
    "amount",
    "term_months",
    "annual_interest_rate",
];

/// Rate applied when the request omits `annual_interest_rate`.
pub const DEFAULT_ANNUAL_INTEREST_RATE: f64 = 5.0;

/// A single rejected field with its user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// All violations for one request body, in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    pub violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    /// The per-field messages joined into the response message.
    pub fn combined_message(&self) -> String {
        self.violations
            .iter()
            .map(|violation| violation.message.as_str())
            .collect::<Vec<_>>()
            .join(". ")
    }
}

/// Check a create request body and coerce it into a typed command.
pub fn validate_create_request(body: &Value) -> Result<CreateLoanApplication, ValidationFailure> {
    let fields = match body.as_object() {
        Some(fields) => fields,
        None => {
            return Err(ValidationFailure {
                violations: vec![violation("value", "value must be of type object")],
            })
        }
    };

    let mut violations = Vec::new();

    let customer_id = match fields.get("customer_id") {
        None => {
            violations.push(violation("customer_id", "customer_id is required"));
            None
        }
        Some(raw) => match coerce_number(raw) {
            None => {
                violations.push(violation("customer_id", "Customer ID must be a number"));
                None
            }
            Some(value) if !is_safe_integer(value) => {
                violations.push(violation("customer_id", "Customer ID must be an integer"));
                None
            }
            Some(value) if value <= 0.0 => {
                violations.push(violation("customer_id", "Customer ID must be a positive number"));
                None
            }
            Some(value) => Some(value as i64),
        },
    };

    let amount = match fields.get("amount") {
        None => {
            violations.push(violation("amount", "amount is required"));
            None
        }
        Some(raw) => match coerce_number(raw) {
            None => {
                violations.push(violation("amount", "Loan amount must be a number"));
                None
            }
            Some(value) if value <= 0.0 => {
                violations.push(violation("amount", "Loan amount must be a positive number"));
                None
            }
            Some(value) => Some(value),
        },
    };

    let term_months = match fields.get("term_months") {
        None => {
            violations.push(violation("term_months", "term_months is required"));
            None
        }
        Some(raw) => match coerce_number(raw) {
            None => {
                violations.push(violation("term_months", "Term months must be a number"));
                None
            }
            Some(value) if !is_safe_integer(value) || value > i32::MAX as f64 => {
                violations.push(violation("term_months", "Term months must be an integer"));
                None
            }
            Some(value) if value < 1.0 => {
                violations.push(violation("term_months", "Term months must be at least 1"));
                None
            }
            Some(value) => Some(value as i32),
        },
    };

    let annual_interest_rate = match fields.get("annual_interest_rate") {
        None => Some(DEFAULT_ANNUAL_INTEREST_RATE),
        Some(raw) => match coerce_number(raw) {
            None => {
                violations.push(violation(
                    "annual_interest_rate",
                    "Annual interest rate must be a number",
                ));
                None
            }
            Some(value) if value < 0.0 => {
                violations.push(violation(
                    "annual_interest_rate",
                    "Annual interest rate cannot be negative",
                ));
                None
            }
            Some(value) if value > 100.0 => {
                violations.push(violation(
                    "annual_interest_rate",
                    "Annual interest rate cannot exceed 100%",
                ));
                None
            }
            Some(value) => Some(value),
        },
    };

    for field in fields.keys() {
        if !KNOWN_FIELDS.contains(&field.as_str()) {
            violations.push(FieldViolation {
                field: field.clone(),
                message: format!("{} is not allowed", field),
            });
        }
    }

    match (customer_id, amount, term_months, annual_interest_rate) {
        (Some(customer_id), Some(amount), Some(term_months), Some(annual_interest_rate))
            if violations.is_empty() =>
        {
            Ok(CreateLoanApplication {
                customer_id,
                amount,
                term_months,
                annual_interest_rate,
            })
        }
        _ => Err(ValidationFailure { violations }),
    }
}

fn violation(field: &str, message: &str) -> FieldViolation {
    FieldViolation {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// A JSON number, or a non-empty string holding a finite number.
fn coerce_number(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|parsed| parsed.is_finite())
        }
        _ => None,
    }
}

fn is_safe_integer(value: f64) -> bool {
    value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER
}

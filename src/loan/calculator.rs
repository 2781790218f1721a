//! Amortized monthly repayment math

/// Compute the monthly repayment for a loan of `amount` at
/// `annual_rate_percent` (nominal annual rate, in percent) over
/// `term_months` equal installments.
///
/// Uses the standard amortization formula with monthly compounding and
/// rounds the result to cents. A zero rate degenerates to straight-line
/// division of the principal, returned unrounded. Callers guarantee a
/// positive amount and a term of at least one month.
pub fn monthly_repayment(amount: f64, annual_rate_percent: f64, term_months: u32) -> f64 {
    let monthly_rate = annual_rate_percent / 12.0 / 100.0;

    if monthly_rate == 0.0 {
        return amount / term_months as f64;
    }

    let growth = (1.0 + monthly_rate).powf(term_months as f64);
    let payment = amount * monthly_rate * growth / (growth - 1.0);

    (payment * 100.0).round() / 100.0
}

//! Dispatch a validated query to the matching formula.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::time::Instant;

use crate::config::CalculatorConfig;
use crate::differentiated::{differentiated_schedule, schedule_overpayment, schedule_total, SETTLE_DP};
use crate::error::LoanCalcError;
use crate::time_value::{annuity_payment, loan_principal, number_of_periods};
use crate::types::*;
use crate::validation::validate_arguments;
use crate::LoanCalcResult;

/// Whole-unit difference between `payment * periods` and the principal
fn annuity_overpayment(payment: Money, periods: u32, principal: Money) -> LoanCalcResult<Money> {
    payment
        .checked_mul(Decimal::from(periods))
        .and_then(|paid| paid.checked_sub(principal))
        .map(|diff| diff.abs().trunc())
        .ok_or_else(|| LoanCalcError::overflow("overpayment"))
}

/// Compute the unknown described by `query`.
pub fn calculate(query: &LoanQuery) -> LoanCalcResult<LoanResult> {
    match *query {
        LoanQuery::SolveForPayment { principal, periods, rate } => {
            let exact = annuity_payment(principal, rate, periods)?.round_dp(SETTLE_DP);
            let payment = exact.ceil();
            log::debug!("annuity payment for {principal} over {periods} months: {payment}");
            Ok(LoanResult {
                solved_for: Unknown::Payment,
                computed_value: payment,
                exact_value: Some(exact),
                overpayment: annuity_overpayment(payment, periods, principal)?,
                term_months: periods,
                schedule: Vec::new(),
            })
        }
        LoanQuery::SolveForPrincipal { payment, periods, rate } => {
            let exact = loan_principal(payment, rate, periods)?.round_dp(SETTLE_DP);
            let principal = exact.floor();
            log::debug!("principal repaid by {payment} over {periods} months: {principal}");
            Ok(LoanResult {
                solved_for: Unknown::Principal,
                computed_value: principal,
                exact_value: Some(exact),
                overpayment: annuity_overpayment(payment, periods, principal)?,
                term_months: periods,
                schedule: Vec::new(),
            })
        }
        LoanQuery::SolveForPeriods { principal, payment, rate } => {
            let exact = number_of_periods(principal, payment, rate)?.round_dp(SETTLE_DP);
            let months = exact.ceil();
            let periods = months.to_u32().ok_or_else(|| LoanCalcError::InvalidInput {
                field: "periods".into(),
                reason: format!("computed term of {months} months is out of range"),
            })?;
            log::debug!("{principal} repaid by {payment} per month in {exact} months");
            Ok(LoanResult {
                solved_for: Unknown::Periods,
                computed_value: months,
                exact_value: Some(exact),
                overpayment: annuity_overpayment(payment, periods, principal)?,
                term_months: periods,
                schedule: Vec::new(),
            })
        }
        LoanQuery::DifferentiatedSchedule { principal, periods, rate } => {
            let schedule = differentiated_schedule(principal, rate, periods)?;
            let total = schedule_total(&schedule)?;
            log::debug!("differentiated schedule of {periods} months totals {total}");
            Ok(LoanResult {
                solved_for: Unknown::TotalRepaid,
                computed_value: total,
                exact_value: None,
                overpayment: schedule_overpayment(&schedule, principal)?,
                term_months: periods,
                schedule,
            })
        }
    }
}

fn methodology(query: &LoanQuery) -> &'static str {
    match query {
        LoanQuery::SolveForPayment { .. } => "Annuity payment: P * i(1+i)^n / ((1+i)^n - 1), rounded up",
        LoanQuery::SolveForPrincipal { .. } => "Loan principal: A / (i(1+i)^n / ((1+i)^n - 1)), rounded down",
        LoanQuery::SolveForPeriods { .. } => "Number of periods: log_(1+i)(A / (A - iP)), rounded up",
        LoanQuery::DifferentiatedSchedule { .. } => {
            "Differentiated payments: P/n + i(P - P(k-1)/n), each rounded up"
        }
    }
}

/// Validate raw arguments, compute the result and wrap it with metadata.
pub fn run(args: &LoanArguments, config: &CalculatorConfig) -> LoanCalcResult<ComputationOutput<LoanResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let params = validate_arguments(args, config)?;
    let query = LoanQuery::try_from(&params)?;
    let result = calculate(&query)?;

    if let (LoanQuery::SolveForPeriods { payment, .. }, Some(exact)) = (&query, result.exact_value) {
        if exact != result.computed_value {
            warnings.push(format!(
                "Term of {} months rounded up to {}; the final installment is smaller than {payment}.",
                exact.round_dp(2),
                result.term_months
            ));
        }
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(methodology(&query), &params, warnings, elapsed, result))
}

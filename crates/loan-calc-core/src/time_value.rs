//! Closed-form annuity formulas on a nominal monthly rate.
//!
//! Every function returns the unrounded value; display rounding is applied
//! by the engine.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::LoanCalcError;
use crate::types::{Money, Rate};
use crate::LoanCalcResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Nominal monthly rate from an annual percentage: 12% -> 0.01
pub fn normalize_rate(interest_rate_percent: Rate) -> Rate {
    interest_rate_percent / PERCENT / MONTHS_PER_YEAR
}

/// Share of the principal repaid each month: i / (1 - (1+i)^-n)
///
/// Discounting with v = 1/(1+i) keeps the power at or below one for any
/// positive rate, so long terms settle towards `i` instead of overflowing.
fn annuity_factor(rate: Rate, periods: u32) -> LoanCalcResult<Decimal> {
    if periods == 0 {
        return Err(LoanCalcError::InvalidInput {
            field: "periods".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    if rate.is_zero() {
        return Ok(Decimal::ONE / Decimal::from(periods));
    }

    let growth = Decimal::ONE
        .checked_add(rate)
        .ok_or_else(|| LoanCalcError::overflow("monthly growth factor"))?;
    let discount = Decimal::ONE
        .checked_div(growth)
        .ok_or_else(|| LoanCalcError::DivisionByZero {
            context: "monthly discount factor".into(),
        })?;
    let discounted = discount.checked_powi(i64::from(periods)).ok_or_else(|| {
        LoanCalcError::overflow(format!("discounting over {periods} periods"))
    })?;
    let denominator = Decimal::ONE - discounted;

    rate.checked_div(denominator).ok_or_else(|| LoanCalcError::DivisionByZero {
        context: "annuity factor".into(),
    })
}

/// Monthly annuity payment that repays `principal` over `periods` months
pub fn annuity_payment(principal: Money, rate: Rate, periods: u32) -> LoanCalcResult<Money> {
    principal
        .checked_mul(annuity_factor(rate, periods)?)
        .ok_or_else(|| LoanCalcError::overflow("annuity payment"))
}

/// Principal that a monthly `payment` repays over `periods` months
pub fn loan_principal(payment: Money, rate: Rate, periods: u32) -> LoanCalcResult<Money> {
    let factor = annuity_factor(rate, periods)?;
    if factor.is_zero() {
        return Err(LoanCalcError::DivisionByZero {
            context: "loan principal".into(),
        });
    }
    payment
        .checked_div(factor)
        .ok_or_else(|| LoanCalcError::overflow("loan principal"))
}

/// Fractional number of months for `payment` to repay `principal`:
/// log_{1+i}(A / (A - i*P)).
///
/// Fails when the payment does not exceed the first month's interest.
pub fn number_of_periods(principal: Money, payment: Money, rate: Rate) -> LoanCalcResult<Decimal> {
    if payment <= Decimal::ZERO {
        return Err(LoanCalcError::InvalidInput {
            field: "payment".into(),
            reason: "Payment must be > 0".into(),
        });
    }

    if rate.is_zero() {
        return principal
            .checked_div(payment)
            .ok_or_else(|| LoanCalcError::overflow("number of periods"));
    }

    let monthly_interest = rate
        .checked_mul(principal)
        .ok_or_else(|| LoanCalcError::overflow("monthly interest"))?;
    if payment <= monthly_interest {
        return Err(LoanCalcError::NonAmortizingPayment {
            payment,
            monthly_interest,
        });
    }

    let ratio = payment
        .checked_sub(monthly_interest)
        .and_then(|amortized| payment.checked_div(amortized))
        .ok_or_else(|| LoanCalcError::overflow("payment ratio"))?;
    let numerator = ratio.checked_ln().ok_or_else(|| LoanCalcError::InvalidInput {
        field: "payment".into(),
        reason: format!("logarithm undefined for payment ratio {ratio}"),
    })?;
    let base = Decimal::ONE
        .checked_add(rate)
        .and_then(|growth| growth.checked_ln())
        .ok_or_else(|| LoanCalcError::InvalidInput {
            field: "interest".into(),
            reason: format!("logarithm undefined for growth rate {rate}"),
        })?;

    numerator.checked_div(base).ok_or_else(|| LoanCalcError::DivisionByZero {
        context: "number of periods".into(),
    })
}

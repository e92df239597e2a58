//! Differentiated repayment: equal principal slices, interest charged on the
//! balance outstanding at the start of each month.

use rust_decimal::Decimal;

use crate::error::LoanCalcError;
use crate::types::{Money, MonthlyPayment, Rate};
use crate::LoanCalcResult;

/// Decimal places kept before rounding a computed amount to a whole unit.
pub(crate) const SETTLE_DP: u32 = 12;

/// Unrounded installment for month `month` (1-based)
pub fn differentiated_payment(principal: Money, rate: Rate, periods: u32, month: u32) -> LoanCalcResult<Money> {
    if periods == 0 {
        return Err(LoanCalcError::InvalidInput {
            field: "periods".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }
    if month == 0 || month > periods {
        return Err(LoanCalcError::InvalidInput {
            field: "month".into(),
            reason: format!("month must be within 1..={periods}, got {month}"),
        });
    }

    let n = Decimal::from(periods);
    let slice = principal / n;
    principal
        .checked_mul(Decimal::from(month - 1))
        .map(|repaid| repaid / n)
        .and_then(|repaid_before| principal.checked_sub(repaid_before))
        .and_then(|balance| rate.checked_mul(balance))
        .and_then(|interest| slice.checked_add(interest))
        .ok_or_else(|| LoanCalcError::overflow(format!("installment for month {month}")))
}

/// Full schedule, each installment rounded up to a whole unit
pub fn differentiated_schedule(principal: Money, rate: Rate, periods: u32) -> LoanCalcResult<Vec<MonthlyPayment>> {
    if periods == 0 {
        return Err(LoanCalcError::InvalidInput {
            field: "periods".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    (1..=periods)
        .map(|month| {
            let amount = differentiated_payment(principal, rate, periods, month)?
                .round_dp(SETTLE_DP)
                .ceil();
            Ok(MonthlyPayment { month, amount })
        })
        .collect()
}

/// Sum of all installments
pub fn schedule_total(schedule: &[MonthlyPayment]) -> LoanCalcResult<Money> {
    schedule
        .iter()
        .try_fold(Decimal::ZERO, |total, p| total.checked_add(p.amount))
        .ok_or_else(|| LoanCalcError::overflow("schedule total"))
}

/// Whole-unit difference between everything paid and the principal
pub fn schedule_overpayment(schedule: &[MonthlyPayment], principal: Money) -> LoanCalcResult<Money> {
    let total = schedule_total(schedule)?;
    total
        .checked_sub(principal)
        .map(|diff| diff.abs().trunc())
        .ok_or_else(|| LoanCalcError::overflow("overpayment"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_value::normalize_rate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_schedule_declines_by_interest_on_slice() {
        let rate = normalize_rate(dec!(7.8));
        let schedule = differentiated_schedule(dec!(500_000), rate, 10).unwrap();
        assert_eq!(schedule.len(), 10);
        assert_eq!(schedule[0], MonthlyPayment { month: 1, amount: dec!(53250) });
        assert_eq!(schedule[1].amount, dec!(52925));
        assert_eq!(schedule[9], MonthlyPayment { month: 10, amount: dec!(50325) });
        assert_eq!(schedule_overpayment(&schedule, dec!(500_000)).unwrap(), dec!(17875));
    }

    #[test]
    fn test_schedule_rounds_up() {
        // 1000 / 3 = 333.33.. per slice, no interest
        let schedule = differentiated_schedule(dec!(1000), Decimal::ZERO, 3).unwrap();
        assert!(schedule.iter().all(|p| p.amount == dec!(334)));
        assert_eq!(schedule_overpayment(&schedule, dec!(1000)).unwrap(), dec!(2));
    }

    #[test]
    fn test_month_out_of_range() {
        assert!(differentiated_payment(dec!(1000), dec!(0.01), 12, 0).is_err());
        assert!(differentiated_payment(dec!(1000), dec!(0.01), 12, 13).is_err());
        assert!(differentiated_schedule(dec!(1000), dec!(0.01), 0).is_err());
    }

    #[test]
    fn test_installment_overflow_is_reported() {
        let rate = normalize_rate(dec!(10_000_000_000_000_000_000_000_000_000));
        let err = differentiated_schedule(dec!(9_000_000_000_000_000_000), rate, 1).unwrap_err();
        assert!(matches!(err, LoanCalcError::Overflow { .. }));
    }
}

//! Argument validation and query construction.

use rust_decimal::Decimal;

use crate::config::CalculatorConfig;
use crate::error::{LoanCalcError, ValidationRule};
use crate::time_value::normalize_rate;
use crate::types::{LoanArguments, LoanParameters, LoanQuery, RepaymentType};
use crate::LoanCalcResult;

fn reject<T>(rule: ValidationRule) -> LoanCalcResult<T> {
    log::warn!("rejecting loan arguments: {rule}");
    Err(LoanCalcError::IncorrectParameters(rule))
}

/// Check raw arguments against the validation rules, first failure wins.
pub fn validate_arguments(args: &LoanArguments, config: &CalculatorConfig) -> LoanCalcResult<LoanParameters> {
    let Some(loan_type) = args.loan_type else {
        return reject(ValidationRule::MissingType);
    };

    if loan_type == RepaymentType::Differentiated && args.payment.is_some() {
        return reject(ValidationRule::PaymentWithDifferentiated);
    }

    let interest = match args.interest {
        Some(rate) if !rate.is_zero() => rate,
        _ => return reject(ValidationRule::UnusableInterest),
    };

    if args.supplied_count() < config.min_parameters {
        return reject(ValidationRule::TooFewParameters);
    }

    let any_negative = args.payment.is_some_and(|v| v < 0)
        || args.principal.is_some_and(|v| v < 0)
        || args.periods.is_some_and(|v| v < 0)
        || interest < Decimal::ZERO;
    if any_negative {
        return reject(ValidationRule::NegativeValue);
    }

    let periods = match args.periods.map(u32::try_from).transpose() {
        Ok(periods) => periods,
        Err(_) => {
            return Err(LoanCalcError::InvalidInput {
                field: "periods".into(),
                reason: "Number of periods is too large".into(),
            })
        }
    };

    log::debug!("validated {loan_type} loan arguments");
    Ok(LoanParameters {
        loan_type,
        principal: args.principal.map(Decimal::from),
        payment: args.payment.map(Decimal::from),
        periods,
        interest_rate_percent: interest,
    })
}

impl TryFrom<&LoanParameters> for LoanQuery {
    type Error = LoanCalcError;

    fn try_from(params: &LoanParameters) -> Result<Self, Self::Error> {
        let rate = normalize_rate(params.interest_rate_percent);
        let query = match (params.loan_type, params.principal, params.payment, params.periods) {
            (RepaymentType::Differentiated, Some(principal), None, Some(periods)) => {
                LoanQuery::DifferentiatedSchedule { principal, periods, rate }
            }
            (RepaymentType::Annuity, Some(principal), None, Some(periods)) => {
                LoanQuery::SolveForPayment { principal, periods, rate }
            }
            (RepaymentType::Annuity, None, Some(payment), Some(periods)) => {
                LoanQuery::SolveForPrincipal { payment, periods, rate }
            }
            (RepaymentType::Annuity, Some(principal), Some(payment), None) => {
                LoanQuery::SolveForPeriods { principal, payment, rate }
            }
            _ => return reject(ValidationRule::UnknownNotIdentifiable),
        };
        Ok(query)
    }
}

/// Validate raw arguments and decide what to compute.
pub fn build_query(args: &LoanArguments, config: &CalculatorConfig) -> LoanCalcResult<LoanQuery> {
    let params = validate_arguments(args, config)?;
    LoanQuery::try_from(&params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn annuity_args() -> LoanArguments {
        LoanArguments {
            loan_type: Some(RepaymentType::Annuity),
            payment: None,
            principal: Some(1_000_000),
            periods: Some(60),
            interest: Some(dec!(10)),
        }
    }

    fn rule_of(args: &LoanArguments) -> Option<ValidationRule> {
        build_query(args, &CalculatorConfig::default()).unwrap_err().rule()
    }

    #[test]
    fn test_valid_annuity_passes_unchanged() {
        let params = validate_arguments(&annuity_args(), &CalculatorConfig::default()).unwrap();
        assert_eq!(params.loan_type, RepaymentType::Annuity);
        assert_eq!(params.principal, Some(dec!(1_000_000)));
        assert_eq!(params.payment, None);
        assert_eq!(params.periods, Some(60));
        assert_eq!(params.interest_rate_percent, dec!(10));
    }

    #[test]
    fn test_missing_type() {
        let args = LoanArguments { loan_type: None, ..annuity_args() };
        assert_eq!(rule_of(&args), Some(ValidationRule::MissingType));
    }

    #[test]
    fn test_payment_with_differentiated() {
        let args = LoanArguments {
            loan_type: Some(RepaymentType::Differentiated),
            payment: Some(100),
            principal: Some(1000),
            periods: Some(10),
            interest: Some(dec!(5)),
        };
        assert_eq!(rule_of(&args), Some(ValidationRule::PaymentWithDifferentiated));
    }

    #[test]
    fn test_missing_or_zero_interest() {
        let args = LoanArguments { interest: None, ..annuity_args() };
        assert_eq!(rule_of(&args), Some(ValidationRule::UnusableInterest));
        let args = LoanArguments { interest: Some(Decimal::ZERO), ..annuity_args() };
        assert_eq!(rule_of(&args), Some(ValidationRule::UnusableInterest));
    }

    #[test]
    fn test_too_few_parameters() {
        let args = LoanArguments { periods: None, ..annuity_args() };
        assert_eq!(rule_of(&args), Some(ValidationRule::TooFewParameters));
    }

    #[test]
    fn test_every_field_checked_for_negatives() {
        let cases = [
            LoanArguments { principal: Some(-1), ..annuity_args() },
            LoanArguments { periods: Some(-60), ..annuity_args() },
            LoanArguments { interest: Some(dec!(-10)), ..annuity_args() },
            LoanArguments { principal: None, payment: Some(-500), ..annuity_args() },
            // a later field is negative while an earlier one is positive
            LoanArguments { principal: Some(1000), periods: Some(-1), ..annuity_args() },
        ];
        for args in &cases {
            assert_eq!(rule_of(args), Some(ValidationRule::NegativeValue), "{args:?}");
        }
    }

    #[test]
    fn test_all_values_present_is_ambiguous() {
        let args = LoanArguments { payment: Some(21248), ..annuity_args() };
        assert_eq!(rule_of(&args), Some(ValidationRule::UnknownNotIdentifiable));
    }

    #[test]
    fn test_configured_floor() {
        let config = CalculatorConfig { min_parameters: 5, ..CalculatorConfig::default() };
        let err = build_query(&annuity_args(), &config).unwrap_err();
        assert_eq!(err.rule(), Some(ValidationRule::TooFewParameters));
    }

    #[test]
    fn test_query_shapes() {
        let config = CalculatorConfig::default();
        let rate = normalize_rate(dec!(10));

        assert_eq!(
            build_query(&annuity_args(), &config).unwrap(),
            LoanQuery::SolveForPayment { principal: dec!(1_000_000), periods: 60, rate }
        );

        let args = LoanArguments { principal: None, payment: Some(8722), ..annuity_args() };
        assert_eq!(
            build_query(&args, &config).unwrap(),
            LoanQuery::SolveForPrincipal { payment: dec!(8722), periods: 60, rate }
        );

        let args = LoanArguments { periods: None, payment: Some(23_000), ..annuity_args() };
        assert_eq!(
            build_query(&args, &config).unwrap(),
            LoanQuery::SolveForPeriods { principal: dec!(1_000_000), payment: dec!(23_000), rate }
        );

        let args = LoanArguments { loan_type: Some(RepaymentType::Differentiated), ..annuity_args() };
        assert_eq!(
            build_query(&args, &config).unwrap(),
            LoanQuery::DifferentiatedSchedule { principal: dec!(1_000_000), periods: 60, rate }
        );
    }
}

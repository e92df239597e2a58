use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The validation rule that rejected a set of loan arguments.
///
/// Every rule surfaces to the user as the same generic message; the variant
/// is kept for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationRule {
    /// No repayment type was given.
    MissingType,
    /// A payment was given for a differentiated schedule.
    PaymentWithDifferentiated,
    /// The interest rate is missing or zero.
    UnusableInterest,
    /// Fewer parameters than the configured floor.
    TooFewParameters,
    /// One of the numeric fields is negative.
    NegativeValue,
    /// The quantity to solve for cannot be determined.
    UnknownNotIdentifiable,
}

impl std::fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::MissingType => "repayment type is missing",
            Self::PaymentWithDifferentiated => "payment given for a differentiated schedule",
            Self::UnusableInterest => "interest rate is missing or zero",
            Self::TooFewParameters => "too few parameters supplied",
            Self::NegativeValue => "negative value supplied",
            Self::UnknownNotIdentifiable => "cannot determine which value to compute",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Error)]
pub enum LoanCalcError {
    #[error("Incorrect parameters")]
    IncorrectParameters(ValidationRule),

    #[error(
        "Payment of {payment} does not cover the monthly interest of {}; the loan is never repaid",
        .monthly_interest.round_dp(2).normalize()
    )]
    NonAmortizingPayment {
        payment: Decimal,
        monthly_interest: Decimal,
    },

    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Arithmetic overflow in {context}")]
    Overflow { context: String },
}

impl LoanCalcError {
    /// The rejecting rule, when this is a validation failure.
    pub fn rule(&self) -> Option<ValidationRule> {
        match self {
            Self::IncorrectParameters(rule) => Some(*rule),
            _ => None,
        }
    }

    pub(crate) fn overflow(context: impl Into<String>) -> Self {
        Self::Overflow {
            context: context.into(),
        }
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%) unless the name says percent.
pub type Rate = Decimal;

/// Repayment scheme of the loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepaymentType {
    /// Fixed monthly payment
    #[serde(rename = "annuity")]
    Annuity,
    /// Equal principal slices, interest on the declining balance
    #[serde(rename = "diff")]
    Differentiated,
}

impl std::fmt::Display for RepaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Annuity => write!(f, "annuity"),
            Self::Differentiated => write!(f, "diff"),
        }
    }
}

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Loan arguments exactly as supplied, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanArguments {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub loan_type: Option<RepaymentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periods: Option<i64>,
    /// Annual interest rate as a percentage (11.7 = 11.7%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<Rate>,
}

impl LoanArguments {
    /// Number of populated parameters, type and interest included.
    pub fn supplied_count(&self) -> usize {
        [
            self.loan_type.is_some(),
            self.payment.is_some(),
            self.principal.is_some(),
            self.periods.is_some(),
            self.interest.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

/// Validated loan parameters. Exactly one loan value is missing for an
/// annuity; a differentiated schedule has principal and periods but no payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub loan_type: RepaymentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periods: Option<u32>,
    pub interest_rate_percent: Rate,
}

/// What to compute, with exactly the inputs that computation needs.
/// `rate` is the nominal monthly rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LoanQuery {
    SolveForPayment {
        principal: Money,
        periods: u32,
        rate: Rate,
    },
    SolveForPrincipal {
        payment: Money,
        periods: u32,
        rate: Rate,
    },
    SolveForPeriods {
        principal: Money,
        payment: Money,
        rate: Rate,
    },
    DifferentiatedSchedule {
        principal: Money,
        periods: u32,
        rate: Rate,
    },
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// The quantity held in `LoanResult::computed_value`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unknown {
    Payment,
    Principal,
    Periods,
    /// Sum of all differentiated installments
    TotalRepaid,
}

/// One installment of a differentiated schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPayment {
    pub month: u32,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub solved_for: Unknown,
    pub computed_value: Money,
    /// Value before rounding to a whole unit; absent for schedules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_value: Option<Money>,
    pub overpayment: Money,
    /// Loan term in months, given or computed
    pub term_months: u32,
    /// Empty for annuity loans
    pub schedule: Vec<MonthlyPayment>,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

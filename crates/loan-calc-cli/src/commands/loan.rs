use clap::{Args, ValueEnum};
use rust_decimal::Decimal;

use loan_calc_core::{CalculatorConfig, ComputationOutput, LoanArguments, LoanResult, RepaymentType};

use crate::input::{self, JsonSource};

/// Repayment type as spelled on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LoanTypeArg {
    Diff,
    Annuity,
}

impl From<LoanTypeArg> for RepaymentType {
    fn from(arg: LoanTypeArg) -> Self {
        match arg {
            LoanTypeArg::Diff => RepaymentType::Differentiated,
            LoanTypeArg::Annuity => RepaymentType::Annuity,
        }
    }
}

/// Arguments for a loan calculation
#[derive(Args)]
pub struct LoanArgs {
    /// Path to JSON input file, or "-" for stdin (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Repayment type
    #[arg(long = "type", required_unless_present = "input")]
    pub loan_type: Option<LoanTypeArg>,

    /// Monthly payment
    #[arg(long)]
    pub payment: Option<i64>,

    /// Loan principal
    #[arg(long)]
    pub principal: Option<i64>,

    /// Number of monthly periods
    #[arg(long)]
    pub periods: Option<i64>,

    /// Annual interest rate in percent, without the % sign
    #[arg(long)]
    pub interest: Option<Decimal>,
}

fn read_arguments(args: &LoanArgs) -> Result<LoanArguments, Box<dyn std::error::Error>> {
    let loan_args = match args.input.as_deref() {
        Some(source) => input::parse_json(&JsonSource::from(source))?,
        None => LoanArguments {
            loan_type: args.loan_type.map(RepaymentType::from),
            payment: args.payment,
            principal: args.principal,
            periods: args.periods,
            interest: args.interest,
        },
    };
    Ok(loan_args)
}

pub fn run_loan(
    args: &LoanArgs,
    config: &CalculatorConfig,
) -> Result<ComputationOutput<LoanResult>, Box<dyn std::error::Error>> {
    let loan_args = read_arguments(args)?;
    log::debug!("{} of 5 loan parameters supplied", loan_args.supplied_count());
    Ok(loan_calc_core::run(&loan_args, config)?)
}

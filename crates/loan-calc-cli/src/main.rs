mod commands;
mod input;
mod output;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::process;

use commands::loan::LoanArgs;
use loan_calc_core::{CalculatorConfig, LoanCalcError};

/// Annuity and differentiated loan calculator
#[derive(Parser)]
#[command(
    name = "loan-calculator",
    version,
    about = "Annuity and differentiated loan calculator",
    long_about = "Computes the annuity payment, loan principal or number of periods \
                  from the other two values and an interest rate, or prints a \
                  month-by-month differentiated repayment schedule.",
    allow_negative_numbers = true
)]
struct Cli {
    #[command(flatten)]
    loan: LoanArgs,

    /// Output format
    #[arg(long, default_value = "text")]
    output: OutputFormat,

    /// Path to a JSON file overriding the calculator configuration
    #[arg(long)]
    config: Option<String>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Table,
    Csv,
    Minimal,
}

fn load_config(path: Option<&str>) -> Result<CalculatorConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => input::parse_json(&input::JsonSource::from(path)),
        None => Ok(CalculatorConfig::default()),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };

    let result = commands::loan::run_loan(&cli.loan, &config)
        .and_then(|computed| output::format_output(&cli.output, &computed));

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            if let Some(LoanCalcError::IncorrectParameters(_)) = e.downcast_ref::<LoanCalcError>() {
                println!("{}", config.error_message);
                process::exit(0);
            }
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

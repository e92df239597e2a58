use loan_calc_core::{ComputationOutput, LoanResult};

/// Pretty-print the full computation envelope to stdout.
pub fn print_json(output: &ComputationOutput<LoanResult>) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}

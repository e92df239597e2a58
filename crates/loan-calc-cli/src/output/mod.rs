pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;
pub mod text;

use loan_calc_core::{ComputationOutput, LoanResult};

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(
    format: &OutputFormat,
    output: &ComputationOutput<LoanResult>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Text => text::print_text(&output.result),
        OutputFormat::Json => json::print_json(output)?,
        OutputFormat::Csv => csv_out::print_csv(&output.result)?,
        OutputFormat::Table | OutputFormat::Minimal => {
            let value = serde_json::to_value(output)?;
            if let OutputFormat::Table = format {
                table::print_table(&value);
            } else {
                minimal::print_minimal(&value);
            }
        }
    }
    Ok(())
}

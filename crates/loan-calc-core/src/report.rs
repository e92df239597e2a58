//! Human-readable output lines for a computed loan.

use crate::types::{LoanResult, Money, Unknown};

/// Emitted when a term is neither a whole number of years nor a remainder.
pub const PERIODS_PLACEHOLDER: &str = "Please check the number of periods";

const MONTHS_PER_YEAR: u32 = 12;

fn whole(value: Money) -> String {
    value.normalize().to_string()
}

/// Describe a term in months as years and months.
pub fn format_periods(periods: u32) -> String {
    let years = periods / MONTHS_PER_YEAR;
    let months = periods % MONTHS_PER_YEAR;

    if months == 0 {
        format!("It will take {years} years to repay this loan!")
    } else if months > 0 {
        format!("It will take {years} years and {months} months to repay this loan!")
    } else {
        // months is unsigned, so one of the branches above always matches
        PERIODS_PLACEHOLDER.to_string()
    }
}

/// Output lines for a result, in print order.
pub fn render_lines(result: &LoanResult) -> Vec<String> {
    let mut lines = Vec::new();
    match result.solved_for {
        Unknown::Payment => {
            lines.push(format!("Your annuity payment = {}!", whole(result.computed_value)));
        }
        Unknown::Principal => {
            lines.push(format!("Your loan principal = {}!", whole(result.computed_value)));
        }
        Unknown::Periods => lines.push(format_periods(result.term_months)),
        Unknown::TotalRepaid => {
            for p in &result.schedule {
                lines.push(format!("Month {}: payment is {}", p.month, whole(p.amount)));
            }
            lines.push(String::new());
        }
    }
    lines.push(format!("Overpayment = {}", whole(result.overpayment)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_years() {
        assert_eq!(format_periods(24), "It will take 2 years to repay this loan!");
        assert_eq!(format_periods(12), "It will take 1 years to repay this loan!");
    }

    #[test]
    fn test_format_years_and_months() {
        assert_eq!(format_periods(25), "It will take 2 years and 1 months to repay this loan!");
        assert_eq!(format_periods(5), "It will take 0 years and 5 months to repay this loan!");
    }
}

use loan_calc_core::{LoanResult, Unknown};
use std::io;

/// Write the result as CSV to stdout.
pub fn print_csv(result: &LoanResult) -> csv::Result<()> {
    write_csv(result, io::stdout().lock())
}

/// A differentiated loan is written as its month/amount schedule followed by
/// `total` and `overpayment` summary rows; anything else as field/value pairs.
pub fn write_csv<W: io::Write>(result: &LoanResult, writer: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    if result.schedule.is_empty() {
        wtr.write_record(["field", "value"])?;
        wtr.write_record(["solved_for", unknown_label(result.solved_for)])?;
        wtr.write_record(["computed_value", &result.computed_value.to_string()])?;
        if let Some(exact) = result.exact_value {
            wtr.write_record(["exact_value", &exact.normalize().to_string()])?;
        }
        wtr.write_record(["overpayment", &result.overpayment.to_string()])?;
        wtr.write_record(["term_months", &result.term_months.to_string()])?;
    } else {
        wtr.write_record(["month", "amount"])?;
        for row in &result.schedule {
            wtr.write_record([row.month.to_string(), row.amount.to_string()])?;
        }
        wtr.write_record(["total", &result.computed_value.to_string()])?;
        wtr.write_record(["overpayment", &result.overpayment.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}

fn unknown_label(unknown: Unknown) -> &'static str {
    match unknown {
        Unknown::Payment => "payment",
        Unknown::Principal => "principal",
        Unknown::Periods => "periods",
        Unknown::TotalRepaid => "total_repaid",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_calc_core::MonthlyPayment;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn render(result: &LoanResult) -> String {
        let mut buffer = Vec::new();
        write_csv(result, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_schedule_ends_with_summary_rows() {
        let result = LoanResult {
            solved_for: Unknown::TotalRepaid,
            computed_value: dec!(1002),
            exact_value: None,
            overpayment: dec!(2),
            term_months: 3,
            schedule: (1..=3).map(|month| MonthlyPayment { month, amount: dec!(334) }).collect(),
        };
        assert_eq!(
            render(&result),
            "month,amount\n1,334\n2,334\n3,334\ntotal,1002\noverpayment,2\n"
        );
    }

    #[test]
    fn test_annuity_as_field_value_pairs() {
        let result = LoanResult {
            solved_for: Unknown::Payment,
            computed_value: dec!(21248),
            exact_value: Some(dec!(21247.044711445300)),
            overpayment: dec!(274880),
            term_months: 60,
            schedule: Vec::new(),
        };
        assert_eq!(
            render(&result),
            "field,value\nsolved_for,payment\ncomputed_value,21248\nexact_value,21247.0447114453\n\
             overpayment,274880\nterm_months,60\n"
        );
    }
}

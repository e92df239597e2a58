use loan_calc_core::report::render_lines;
use loan_calc_core::LoanResult;

/// Print the calculator's plain-text report.
pub fn print_text(result: &LoanResult) {
    for line in render_lines(result) {
        println!("{}", line);
    }
}

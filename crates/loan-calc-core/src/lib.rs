pub mod config;
pub mod differentiated;
pub mod engine;
pub mod error;
pub mod report;
pub mod time_value;
pub mod types;
pub mod validation;

pub use config::CalculatorConfig;
pub use engine::{calculate, run};
pub use error::{LoanCalcError, ValidationRule};
pub use types::*;

/// Standard result type for all loan-calc operations
pub type LoanCalcResult<T> = Result<T, LoanCalcError>;

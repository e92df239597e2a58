//! Calculator-wide settings, built once at startup and never mutated.

use serde::{Deserialize, Serialize};

/// Message printed for every rejected set of arguments.
pub const DEFAULT_ERROR_MESSAGE: &str = "Incorrect parameters";

/// Minimum number of populated parameters (type and interest included).
pub const DEFAULT_MIN_PARAMETERS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub error_message: String,
    pub min_parameters: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            min_parameters: DEFAULT_MIN_PARAMETERS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let cfg: CalculatorConfig = serde_json::from_str(r#"{"min_parameters": 5}"#).unwrap();
        assert_eq!(cfg.min_parameters, 5);
        assert_eq!(cfg.error_message, "Incorrect parameters");
    }
}

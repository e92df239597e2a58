//! JSON documents for loan arguments and calculator configuration.

use serde::de::DeserializeOwned;
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Where a JSON document is read from: `-` means stdin, anything else a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonSource {
    Stdin,
    File(PathBuf),
}

impl From<&str> for JsonSource {
    fn from(arg: &str) -> Self {
        match arg {
            "-" => Self::Stdin,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl JsonSource {
    fn describe(&self) -> String {
        match self {
            Self::Stdin => "stdin".to_string(),
            Self::File(path) => format!("'{}'", path.display()),
        }
    }

    fn read_text(&self) -> Result<String, Box<dyn Error>> {
        match self {
            Self::Stdin => {
                if atty::is(atty::Stream::Stdin) {
                    return Err("--input - expects JSON piped on stdin".into());
                }
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
            Self::File(path) => {
                if !path.is_file() {
                    return Err(format!("File not found: {}", path.display()).into());
                }
                fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read '{}': {}", path.display(), e).into())
            }
        }
    }
}

/// Read and deserialise the document at `source`.
pub fn parse_json<T: DeserializeOwned>(source: &JsonSource) -> Result<T, Box<dyn Error>> {
    let text = source.read_text()?;
    parse_document(&text, &source.describe())
}

fn parse_document<T: DeserializeOwned>(text: &str, origin: &str) -> Result<T, Box<dyn Error>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(format!("No JSON found in {origin}").into());
    }
    serde_json::from_str(trimmed).map_err(|e| format!("Failed to parse {origin}: {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_calc_core::{CalculatorConfig, LoanArguments, RepaymentType};

    #[test]
    fn test_dash_means_stdin() {
        assert_eq!(JsonSource::from("-"), JsonSource::Stdin);
        assert_eq!(JsonSource::from("loan.json"), JsonSource::File(PathBuf::from("loan.json")));
    }

    #[test]
    fn test_parse_loan_arguments() {
        let args: LoanArguments = parse_document(
            r#"{"type": "annuity", "principal": 1000000, "periods": 60, "interest": "10"}"#,
            "stdin",
        )
        .unwrap();
        assert_eq!(args.loan_type, Some(RepaymentType::Annuity));
        assert_eq!(args.periods, Some(60));
        assert_eq!(args.supplied_count(), 4);
    }

    #[test]
    fn test_parse_config_override() {
        let config: CalculatorConfig =
            parse_document(r#"{"error_message": "Bad input"}"#, "'config.json'").unwrap();
        assert_eq!(config.error_message, "Bad input");
        assert_eq!(config.min_parameters, 4);
    }

    #[test]
    fn test_empty_document_is_an_error() {
        let err = parse_document::<LoanArguments>("  \n", "stdin").unwrap_err();
        assert_eq!(err.to_string(), "No JSON found in stdin");
    }

    #[test]
    fn test_missing_file() {
        let source = JsonSource::from("does/not/exist.json");
        assert!(parse_json::<LoanArguments>(&source).is_err());
    }
}

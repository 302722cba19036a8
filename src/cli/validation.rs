// validation.rs - Input validation utilities

use crate::cli::args::Args;

/// The validated (input, output) path pair; immutable once built.
pub struct ValidationResult {
    pub input_path: String,
    pub output_path: String,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    let input_path = match args.input.as_deref() {
        Some(path) if !path.is_empty() => path.to_string(),
        _ => return Err("--input is required".to_string()),
    };

    let output_path = match args.output.as_deref() {
        Some(path) if !path.is_empty() => path.to_string(),
        _ => return Err("--output is required".to_string()),
    };

    Ok(ValidationResult {
        input_path,
        output_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_paths_pass_through() {
        let args = Args {
            input: Some("in.csv".to_string()),
            output: Some("out.csv".to_string()),
        };
        let result = validate_args(&args).expect("valid args");
        assert_eq!(result.input_path, "in.csv");
        assert_eq!(result.output_path, "out.csv");
    }

    #[test]
    fn test_missing_input_is_rejected() {
        let args = Args {
            input: None,
            output: Some("out.csv".to_string()),
        };
        let err = validate_args(&args).err().expect("missing input rejected");
        assert!(err.contains("--input"));
    }

    #[test]
    fn test_missing_output_is_rejected() {
        let args = Args {
            input: Some("in.csv".to_string()),
            output: None,
        };
        let err = validate_args(&args).err().expect("missing output rejected");
        assert!(err.contains("--output"));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let args = Args {
            input: Some(String::new()),
            output: Some("out.csv".to_string()),
        };
        assert!(validate_args(&args).is_err());
    }
}

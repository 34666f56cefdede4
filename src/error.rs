//! Error types for the Delivery Pricing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during pricing and pay calculation.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Delivery Pricing Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use delivery_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "mileage".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input field 'mileage': must not be negative");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A calculation input was out of domain.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No configuration exists with the requested id.
    #[error("Configuration not found: {id}")]
    ConfigNotFound {
        /// The configuration id that was not found.
        id: Uuid,
    },

    /// A configuration preset file was missing or unreadable.
    #[error("Configuration preset not found: {path}")]
    PresetNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A configuration preset file could not be parsed.
    #[error("Failed to parse configuration preset '{path}': {message}")]
    PresetParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An imported configuration document was not valid JSON in the expected shape.
    #[error("Invalid configuration format: {message}")]
    InvalidFormat {
        /// A description of the format problem.
        message: String,
    },

    /// A configuration failed structural validation.
    #[error("Configuration validation failed: {}", errors.join("; "))]
    InvalidConfiguration {
        /// All validation violations found.
        errors: Vec<String>,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "headcount".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input field 'headcount': must not be negative"
        );
    }

    #[test]
    fn test_config_not_found_displays_id() {
        let error = EngineError::ConfigNotFound { id: Uuid::nil() };
        assert_eq!(
            error.to_string(),
            "Configuration not found: 00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_preset_parse_error_displays_path_and_message() {
        let error = EngineError::PresetParseError {
            path: "/config/presets/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration preset '/config/presets/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_format_displays_message() {
        let error = EngineError::InvalidFormat {
            message: "expected object".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid configuration format: expected object");
    }

    #[test]
    fn test_invalid_configuration_joins_errors() {
        let error = EngineError::InvalidConfiguration {
            errors: vec![
                "pricing tiers must not be empty".to_string(),
                "distance threshold must be greater than zero".to_string(),
            ],
        };
        assert_eq!(
            error.to_string(),
            "Configuration validation failed: pricing tiers must not be empty; \
             distance threshold must be greater than zero"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "no pricing tier matched".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: no pricing tier matched");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_input() -> EngineResult<()> {
            Err(EngineError::InvalidInput {
                field: "mileage".to_string(),
                message: "must not be negative".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

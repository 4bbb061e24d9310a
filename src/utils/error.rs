use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read input '{path}': {source}")]
    InputReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Template error: {message}")]
    TemplateError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Rendering,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl SheetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SheetError::ConfigValidationError { .. }
            | SheetError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SheetError::InputReadError { .. }
            | SheetError::SerializationError(_)
            | SheetError::YamlError(_) => ErrorCategory::Input,
            SheetError::TemplateError { .. } => ErrorCategory::Rendering,
            SheetError::IoError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Rendering | ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SheetError::InputReadError { .. } => "Check that the input file exists and is readable",
            SheetError::SerializationError(_) => "Make sure the input file is valid JSON",
            SheetError::YamlError(_) => "Make sure the input file is valid YAML",
            SheetError::ConfigValidationError { .. } | SheetError::InvalidConfigValueError { .. } => {
                "Fix the reported setting in the config file or command line"
            }
            SheetError::TemplateError { .. } => "The page skeleton references an unknown placeholder",
            SheetError::IoError(_) => "Check permissions on the output directory",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SheetError::InputReadError { path, .. } => {
                format!("Could not read client record {}", path.display())
            }
            SheetError::SerializationError(e) => format!("Client record is not valid JSON: {}", e),
            SheetError::YamlError(e) => format!("Client record is not valid YAML: {}", e),
            SheetError::IoError(e) => format!("Could not write client sheet: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SheetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_exit_with_one() {
        let err: SheetError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("not valid JSON"));
    }

    #[test]
    fn test_template_errors_are_critical() {
        let err = SheetError::TemplateError {
            message: "missing value for $name".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_input_read_error_names_path() {
        let err = SheetError::InputReadError {
            path: PathBuf::from("records/jane.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("records/jane.json"));
        assert!(err.user_friendly_message().contains("records/jane.json"));
    }
}

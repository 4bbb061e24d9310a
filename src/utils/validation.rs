use crate::utils::error::{Result, SheetError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(SheetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SheetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Output extensions are a bare alphanumeric token such as `html` or `htm`.
pub fn validate_extension(field_name: &str, extension: &str) -> Result<()> {
    if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(SheetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extension.to_string(),
            reason: "Extension must be a non-empty ASCII alphanumeric token (no leading dot)"
                .to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(SheetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.directory", "clients").is_ok());
        assert!(validate_path("output.directory", "").is_err());
        assert!(validate_path("output.directory", "   ").is_err());
        assert!(validate_path("output.directory", "bad\0dir").is_err());
    }

    #[test]
    fn test_validate_extension() {
        assert!(validate_extension("output.extension", "html").is_ok());
        assert!(validate_extension("output.extension", "htm5").is_ok());
        assert!(validate_extension("output.extension", ".html").is_err());
        assert!(validate_extension("output.extension", "").is_err());
        assert!(validate_extension("output.extension", "ht/ml").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.level", "debug", &LOG_LEVELS).is_ok());
        let err = validate_one_of("logging.level", "loud", &LOG_LEVELS).unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }
}

use crate::utils::error::{Result, SheetError};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_extension, validate_one_of, validate_path, Validate, LOG_LEVELS};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every table and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub output: Option<OutputConfig>,
    pub render: Option<RenderConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: Option<String>,
    pub extension: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    pub escape_html: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SheetError::ConfigValidationError {
            field: "config".to_string(),
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SheetError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SheetError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("env pattern failed to compile: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_dir(&self) -> Option<&str> {
        self.output.as_ref()?.directory.as_deref()
    }

    pub fn extension(&self) -> Option<&str> {
        self.output.as_ref()?.extension.as_deref()
    }

    pub fn escape_html(&self) -> Option<bool> {
        self.render.as_ref()?.escape_html
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref()?.level.as_deref()
    }

    pub fn log_format(&self) -> LogFormat {
        match self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(directory) = self.output_dir() {
            validate_path("output.directory", directory)?;
        }
        if let Some(extension) = self.extension() {
            validate_extension("output.extension", extension)?;
        }
        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            validate_one_of("logging.format", format, &["compact", "json"])?;
        }
        Ok(())
    }
}

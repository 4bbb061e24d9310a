pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_extension, validate_path, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

pub const DEFAULT_OUTPUT_DIR: &str = "clients";
pub const DEFAULT_EXTENSION: &str = "html";
pub const USAGE: &str = "Usage: client-sheet <input_json_path>";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "client-sheet")]
#[command(about = "Render a client record into a styled HTML client sheet")]
pub struct CliConfig {
    /// Client record to render (JSON, or YAML for .yaml/.yml files)
    pub input: Option<PathBuf>,

    /// Optional TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory the sheet is written to [default: clients]
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Escape markup-significant characters in record text
    #[arg(long)]
    pub escape_html: bool,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Settings for one run, after layering flags over the settings file over
/// built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub input_path: PathBuf,
    pub output_dir: String,
    pub extension: String,
    pub escape_html: bool,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
}

impl ReportSettings {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            escape_html: false,
            log_level: None,
            log_format: LogFormat::Compact,
        }
    }

    /// Applies the settings file. Flags are layered on afterwards.
    pub fn with_file(mut self, file: &TomlConfig) -> Self {
        if let Some(directory) = file.output_dir() {
            self.output_dir = directory.to_string();
        }
        if let Some(extension) = file.extension() {
            self.extension = extension.to_string();
        }
        if let Some(escape) = file.escape_html() {
            self.escape_html = escape;
        }
        self.log_level = file.log_level().map(str::to_string);
        self.log_format = file.log_format();
        self
    }

    pub fn with_output_dir(mut self, output_dir: Option<String>) -> Self {
        if let Some(output_dir) = output_dir {
            self.output_dir = output_dir;
        }
        self
    }

    /// The flag can only switch escaping on.
    pub fn with_escape_flag(mut self, escape_html: bool) -> Self {
        self.escape_html |= escape_html;
        self
    }
}

impl ConfigProvider for ReportSettings {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn extension(&self) -> &str {
        &self.extension
    }

    fn escape_html(&self) -> bool {
        self.escape_html
    }
}

impl Validate for ReportSettings {
    fn validate(&self) -> Result<()> {
        validate_path("output_dir", &self.output_dir)?;
        validate_extension("extension", &self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ReportSettings::new("record.json");
        assert_eq!(settings.output_dir, "clients");
        assert_eq!(settings.extension(), "html");
        assert!(!settings.escape_html());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_flags_override_file() {
        let file = TomlConfig::from_toml_str(
            "[output]\ndirectory = \"from-file\"\nextension = \"htm\"\n[render]\nescape_html = true\n",
        )
        .unwrap();

        let settings = ReportSettings::new("record.json")
            .with_file(&file)
            .with_output_dir(Some("from-flag".to_string()))
            .with_escape_flag(false);

        assert_eq!(settings.output_dir, "from-flag");
        assert_eq!(settings.extension(), "htm");
        assert!(settings.escape_html());
    }

    #[test]
    fn test_empty_output_dir_is_rejected() {
        let settings = ReportSettings::new("record.json").with_output_dir(Some(String::new()));
        assert!(settings.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parses_flags() {
        use clap::Parser;

        let cli = CliConfig::parse_from([
            "client-sheet",
            "jane.json",
            "--output-dir",
            "out",
            "--escape-html",
            "-v",
        ]);
        assert_eq!(cli.input, Some(PathBuf::from("jane.json")));
        assert_eq!(cli.output_dir.as_deref(), Some("out"));
        assert!(cli.escape_html);
        assert!(cli.verbose);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_input_is_optional_at_parse_time() {
        use clap::Parser;

        let cli = CliConfig::parse_from(["client-sheet"]);
        assert!(cli.input.is_none());
    }
}

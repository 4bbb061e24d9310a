use crate::core::document::assemble;
use crate::core::extract::extract_record;
use crate::core::render::FragmentRenderer;
use crate::core::slug::slugify;
use crate::core::{ClientRecord, ConfigProvider, Pipeline, Record, RenderedReport, Storage};
use crate::utils::error::{Result, SheetError};
use chrono::{DateTime, Utc};
use std::path::Path;

/// How the input file is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// `.yaml` / `.yml` are YAML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => InputFormat::Yaml,
            _ => InputFormat::Json,
        }
    }

    pub fn parse(self, content: &str) -> Result<Record> {
        match self {
            InputFormat::Json => Ok(serde_json::from_str(content)?),
            InputFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        }
    }
}

pub struct ReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    generated_at: Option<DateTime<Utc>>,
}

impl<S: Storage, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            generated_at: None,
        }
    }

    /// Pins the footer timestamp instead of reading the clock.
    pub fn with_generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    fn read_record(&self) -> Result<Record> {
        let path = self.config.input_path();
        let content =
            std::fs::read_to_string(path).map_err(|source| SheetError::InputReadError {
                path: path.to_path_buf(),
                source,
            })?;

        let format = InputFormat::from_path(path);
        tracing::debug!("Parsing {} as {:?} ({} bytes)", path.display(), format, content.len());
        format.parse(&content)
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    fn extract(&self) -> Result<ClientRecord> {
        let raw = self.read_record()?;
        let record = extract_record(&raw);
        tracing::debug!(
            "Client '{}': {} shirt rows, {} trouser rows, {} instructions",
            record.info.name,
            record.shirt_measurements.len(),
            record.trouser_measurements.len(),
            record.instructions.len()
        );
        Ok(record)
    }

    fn transform(&self, record: ClientRecord) -> Result<RenderedReport> {
        let renderer = FragmentRenderer::new(self.config.escape_html());
        let generated_at = self.generated_at.unwrap_or_else(Utc::now);
        let html = assemble(&record, renderer, generated_at)?;

        let slug = slugify(&record.info.name);
        let file_name = format!("{}.{}", slug, self.config.extension());
        tracing::debug!("Rendered {} bytes for slug '{}'", html.len(), slug);

        Ok(RenderedReport {
            slug,
            file_name,
            html,
        })
    }

    fn load(&self, report: RenderedReport) -> Result<String> {
        let written = self.storage.write_file(&report.file_name, report.html.as_bytes())?;
        tracing::debug!("Wrote {} bytes to {}", report.html.len(), written);
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::Result;
    use chrono::TimeZone;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[derive(Default)]
    struct MockStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn get_file(&self, name: &str) -> Option<String> {
            self.files
                .borrow()
                .get(name)
                .map(|data| String::from_utf8_lossy(data).into_owned())
        }
    }

    impl Storage for MockStorage {
        fn write_file(&self, name: &str, data: &[u8]) -> Result<String> {
            self.files.borrow_mut().insert(name.to_string(), data.to_vec());
            Ok(format!("mock/{}", name))
        }
    }

    struct TestConfig {
        input: PathBuf,
        escape: bool,
    }

    impl ConfigProvider for TestConfig {
        fn input_path(&self) -> &Path {
            &self.input
        }

        fn extension(&self) -> &str {
            "html"
        }

        fn escape_html(&self) -> bool {
            self.escape
        }
    }

    fn input_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn pipeline(file: &NamedTempFile, escape: bool) -> ReportPipeline<MockStorage, TestConfig> {
        let config = TestConfig {
            input: file.path().to_path_buf(),
            escape,
        };
        ReportPipeline::new(MockStorage::default(), config)
            .with_generated_at(Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap())
    }

    #[test]
    fn test_input_format_from_path() {
        assert_eq!(InputFormat::from_path(Path::new("a.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("a.YML")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("a.yaml")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("record")), InputFormat::Json);
    }

    #[test]
    fn test_extract_transform_load() {
        let file = input_file(
            ".json",
            r#"{"Client Information": {"Name": "Jane O'Connor!!"}, "Tailor Instructions": ["Hem"]}"#,
        );
        let pipeline = pipeline(&file, false);

        let record = pipeline.extract().unwrap();
        let report = pipeline.transform(record).unwrap();
        assert_eq!(report.slug, "jane-oconnor");
        assert_eq!(report.file_name, "jane-oconnor.html");

        let written = pipeline.load(report).unwrap();
        assert_eq!(written, "mock/jane-oconnor.html");

        let html = pipeline.storage().get_file("jane-oconnor.html").unwrap();
        assert!(html.contains("Client Sheet – Jane O'Connor!!"));
        assert!(html.contains("<li>Hem</li>"));
        assert!(html.contains("Generated on 2024-06-01 12:30 UTC"));
    }

    #[test]
    fn test_load_reports_the_path_storage_wrote() {
        let file = input_file(".json", r#"{"Client Information": {"Name": "Ada"}}"#);
        let temp_dir = tempfile::TempDir::new().unwrap();
        let base = temp_dir.path().join("sheets");
        let config = TestConfig {
            input: file.path().to_path_buf(),
            escape: false,
        };
        let pipeline = ReportPipeline::new(
            crate::config::cli::LocalStorage::new(base.to_string_lossy().into_owned()),
            config,
        );

        let report = pipeline.transform(pipeline.extract().unwrap()).unwrap();
        let written = pipeline.load(report).unwrap();

        assert_eq!(written, base.join("ada.html").display().to_string());
        assert!(base.join("ada.html").is_file());
    }

    #[test]
    fn test_yaml_input_matches_json_input() {
        let json = input_file(
            ".json",
            r#"{"Client Information": {"Name": "Sam"}, "Style Choices": {"Shirt": ["Slim fit"]}}"#,
        );
        let yaml = input_file(
            ".yaml",
            "Client Information:\n  Name: Sam\nStyle Choices:\n  Shirt:\n    - Slim fit\n",
        );

        let from_json = pipeline(&json, false);
        let from_yaml = pipeline(&yaml, false);
        let a = from_json.transform(from_json.extract().unwrap()).unwrap();
        let b = from_yaml.transform(from_yaml.extract().unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_escape_setting_reaches_renderer() {
        let file = input_file(".json", r#"{"Client Information": {"Name": "A <b>"}}"#);
        let pipeline = pipeline(&file, true);
        let report = pipeline.transform(pipeline.extract().unwrap()).unwrap();
        assert!(report.html.contains("Client Sheet – A &lt;b&gt;"));
    }

    #[test]
    fn test_malformed_input_is_fatal() {
        let file = input_file(".json", "{\"Client Information\": ");
        let err = pipeline(&file, false).extract().unwrap_err();
        assert!(matches!(err, SheetError::SerializationError(_)));
    }

    #[test]
    fn test_missing_input_reports_path() {
        let config = TestConfig {
            input: PathBuf::from("definitely/not/here.json"),
            escape: false,
        };
        let err = ReportPipeline::new(MockStorage::default(), config)
            .extract()
            .unwrap_err();
        assert!(matches!(err, SheetError::InputReadError { .. }));
    }
}

use crate::domain::model::{ClientRecord, RenderedReport};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    /// Writes `data` under `name`, creating the destination directory if
    /// needed and overwriting any existing file. Returns the written path.
    fn write_file(&self, name: &str, data: &[u8]) -> Result<String>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn extension(&self) -> &str;
    fn escape_html(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<ClientRecord>;
    fn transform(&self, record: ClientRecord) -> Result<RenderedReport>;
    fn load(&self, report: RenderedReport) -> Result<String>;
}

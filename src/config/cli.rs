use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Writes sheets into a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, name: &str, data: &[u8]) -> Result<String> {
        let base = Path::new(&self.base_path);
        fs::create_dir_all(base)?;

        let full_path = base.join(name);
        fs::write(&full_path, data)?;
        Ok(full_path.display().to_string())
    }
}

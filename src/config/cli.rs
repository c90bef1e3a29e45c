use crate::core::Cache;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Filesystem cache: the schedule text lives in a single flat file,
/// usually next to the binary.
#[derive(Debug, Clone, Default)]
pub struct LocalCache;

impl LocalCache {
    pub fn new() -> Self {
        Self
    }
}

impl Cache for LocalCache {
    async fn read_text(&self, path: &str) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    async fn write_text(&self, path: &str, text: &str) -> Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, text)?;
        Ok(())
    }
}

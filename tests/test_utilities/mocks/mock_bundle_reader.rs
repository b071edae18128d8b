use cert_inventory::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// In-memory BundleReader for testing
#[derive(Default)]
pub struct MockBundleReader {
    directories: HashMap<PathBuf, Vec<PathBuf>>,
    files: BTreeMap<PathBuf, String>,
}

impl MockBundleReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a file; it is also listed by its parent directory
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.directories
                .entry(parent.to_path_buf())
                .or_default()
                .push(path.clone());
        }
        self.files.insert(path, content.to_string());
        self
    }

    /// Listed by its parent directory but fails to read
    pub fn with_unreadable_file(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.directories
                .entry(parent.to_path_buf())
                .or_default()
                .push(path);
        }
        self
    }
}

impl BundleReader for MockBundleReader {
    fn list_directory(&self, directory: &Path) -> Result<Option<Vec<PathBuf>>> {
        Ok(self.directories.get(directory).cloned())
    }

    fn bundle_exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_bundle(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock bundle read failure: {}", path.display()))
    }
}

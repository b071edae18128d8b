use crate::ports::outbound::BundleReader;
use crate::shared::error::CertInventoryError;
use crate::shared::security::{validate_bundle_file, MAX_BUNDLE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::{self, Path, PathBuf};

/// FileSystemBundleReader adapter for reading bundles from the local disk
pub struct FileSystemBundleReader {
    max_bundle_size: u64,
}

impl FileSystemBundleReader {
    pub fn new() -> Self {
        Self {
            max_bundle_size: MAX_BUNDLE_SIZE,
        }
    }

    /// Overrides the bundle size limit
    pub fn with_max_bundle_size(max_bundle_size: u64) -> Self {
        Self { max_bundle_size }
    }
}

impl Default for FileSystemBundleReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BundleReader for FileSystemBundleReader {
    fn list_directory(&self, directory: &Path) -> Result<Option<Vec<PathBuf>>> {
        if !directory.is_dir() {
            return Ok(None);
        }

        let directory_read_error = |details: String| CertInventoryError::DirectoryReadError {
            path: directory.to_path_buf(),
            details,
        };

        let absolute_dir =
            path::absolute(directory).map_err(|e| directory_read_error(e.to_string()))?;
        let entries =
            fs::read_dir(&absolute_dir).map_err(|e| directory_read_error(e.to_string()))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| directory_read_error(e.to_string()))?;
            let path = absolute_dir.join(entry.file_name());
            // is_file follows symlinks; dangling links and sub-directories are skipped
            if path.is_file() {
                files.push(path);
            }
        }

        Ok(Some(files))
    }

    fn bundle_exists(&self, path: &Path) -> bool {
        // Follows symlinks, matching the directory scan
        path.is_file()
    }

    fn read_bundle(&self, path: &Path) -> Result<String> {
        validate_bundle_file(path, self.max_bundle_size)?;

        let bytes = fs::read(path).map_err(|e| CertInventoryError::BundleReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        // PEM is ASCII; comment lines in vendor bundles occasionally are not UTF-8
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

use crate::shared::Result;
use std::path::{Path, PathBuf};

/// BundleReader port for reading certificate bundles from storage
///
/// This port abstracts the file system operations needed to enumerate
/// a trusted certificate directory and read individual bundle files.
pub trait BundleReader {
    /// Lists the regular files directly under `directory`
    ///
    /// # Returns
    /// * `Ok(None)` if the directory does not exist or is not a directory
    /// * `Ok(Some(paths))` with absolute paths otherwise (no recursion)
    ///
    /// # Errors
    /// Returns an error if an existing directory cannot be enumerated
    fn list_directory(&self, directory: &Path) -> Result<Option<Vec<PathBuf>>>;

    /// Whether `path` is a readable bundle candidate: a regular file,
    /// reached through symlinks. Directories and dangling links are not.
    fn bundle_exists(&self, path: &Path) -> bool;

    /// Reads the raw text of a bundle file
    ///
    /// # Errors
    /// Returns an error if the file is missing, not a regular file,
    /// too large, or cannot be read
    fn read_bundle(&self, path: &Path) -> Result<String>;
}

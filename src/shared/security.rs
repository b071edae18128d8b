use crate::shared::error::CertInventoryError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum bundle file size (10 MB)
///
/// The largest public trust store bundles are a few hundred KB.
pub const MAX_BUNDLE_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a bundle path resolves to a regular file of acceptable size
///
/// Symbolic links are followed: system trust stores such as
/// `/etc/ssl/certs` consist mostly of links into a package-managed
/// directory.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist or its metadata cannot be read
/// - The path (after following links) is not a regular file
/// - The file is larger than `max_size`
pub fn validate_bundle_file(path: &Path, max_size: u64) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| CertInventoryError::BundleReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read file metadata: {}", e),
    })?;

    if !metadata.is_file() {
        return Err(CertInventoryError::BundleReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, max_size)
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(CertInventoryError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Certificate bundles should only contain PEM certificates".to_string(),
        }
        .into());
    }
    Ok(())
}

use crate::certificate_discovery::domain::BundleFile;
use std::path::PathBuf;

/// Default bundle extension
pub const DEFAULT_BUNDLE_EXTENSION: &str = ".crt";

/// BundleDirectoryScanner service selecting bundle candidates
///
/// Directory listing itself goes through the `BundleReader` port; this
/// service only decides which listed entries are bundles.
pub struct BundleDirectoryScanner;

impl BundleDirectoryScanner {
    /// Keeps entries whose file name ends with `extension`, sorted by path
    ///
    /// The match is a plain, case-sensitive suffix check on the file name,
    /// so `.crt` does not match `ca.CRT` or `notcrt`.
    pub fn select_bundles(entries: Vec<PathBuf>, extension: &str) -> Vec<BundleFile> {
        let mut bundles: Vec<BundleFile> = entries
            .into_iter()
            .filter(|path| {
                path.file_name()
                    .map(|name| name.to_string_lossy().ends_with(extension))
                    .unwrap_or(false)
            })
            .map(BundleFile::new)
            .collect();
        bundles.sort();
        bundles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_bundles_filters_by_suffix() {
        let entries = vec![
            PathBuf::from("/certs/b.crt"),
            PathBuf::from("/certs/readme.txt"),
            PathBuf::from("/certs/a.crt"),
            PathBuf::from("/certs/c.pem"),
            PathBuf::from("/certs/notcrt"),
        ];

        let bundles = BundleDirectoryScanner::select_bundles(entries, DEFAULT_BUNDLE_EXTENSION);
        let names: Vec<String> = bundles.iter().map(|b| b.display_name()).collect();
        assert_eq!(names, vec!["a.crt", "b.crt"]);
    }

    #[test]
    fn test_select_bundles_pem_extension() {
        let entries = vec![
            PathBuf::from("/certs/a.crt"),
            PathBuf::from("/certs/c.pem"),
        ];

        let bundles = BundleDirectoryScanner::select_bundles(entries, ".pem");
        assert_eq!(bundles.len(), 1);
        assert_eq!(bundles[0].display_name(), "c.pem");
    }

    #[test]
    fn test_select_bundles_is_case_sensitive() {
        let bundles = BundleDirectoryScanner::select_bundles(
            vec![PathBuf::from("/certs/ca.CRT")],
            DEFAULT_BUNDLE_EXTENSION,
        );
        assert!(bundles.is_empty());
    }

    #[test]
    fn test_select_bundles_empty_listing() {
        assert!(BundleDirectoryScanner::select_bundles(vec![], ".crt").is_empty());
    }
}

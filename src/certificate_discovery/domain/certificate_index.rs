use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// CertificateIndex: bundle path -> decoded text of every certificate in it
///
/// Backed by a `BTreeMap`, so iteration is always in path order no matter
/// in which order the directory was enumerated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateIndex {
    entries: BTreeMap<PathBuf, String>,
}

impl CertificateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, path: PathBuf, text: String) {
        self.entries.insert(path, text);
    }

    pub fn get(&self, path: &Path) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys().map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.entries
            .iter()
            .map(|(path, text)| (path.as_path(), text.as_str()))
    }
}

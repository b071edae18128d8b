use std::path::{Path, PathBuf};

/// InstanceIdentity: the certificate identifying the running instance
///
/// guid and index are opaque platform metadata carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceIdentity {
    certificate_path: PathBuf,
    decoded_text: String,
    guid: Option<String>,
    index: Option<String>,
}

impl InstanceIdentity {
    pub fn new(
        certificate_path: PathBuf,
        decoded_text: String,
        guid: Option<String>,
        index: Option<String>,
    ) -> Self {
        Self {
            certificate_path,
            decoded_text,
            guid,
            index,
        }
    }

    pub fn certificate_path(&self) -> &Path {
        &self.certificate_path
    }

    pub fn decoded_text(&self) -> &str {
        &self.decoded_text
    }

    pub fn guid(&self) -> Option<&str> {
        self.guid.as_deref()
    }

    pub fn index(&self) -> Option<&str> {
        self.index.as_deref()
    }
}

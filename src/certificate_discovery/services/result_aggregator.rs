use crate::certificate_discovery::domain::{BundleFile, CertificateIndex, DecodedText};

/// Separator placed between certificates of the same bundle
const CERTIFICATE_SEPARATOR: &str = "\n";

/// ResultAggregator service building the CertificateIndex
///
/// Blank decode results are dropped; a bundle with nothing left contributes
/// no entry at all.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    index: CertificateIndex,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Joins the non-blank texts of one bundle, in order
    ///
    /// # Returns
    /// `None` when no text survives, so callers can treat the bundle as empty
    pub fn join_decoded(texts: Vec<DecodedText>) -> Option<String> {
        let kept: Vec<String> = texts
            .into_iter()
            .filter(|text| !text.is_blank())
            .map(DecodedText::into_string)
            .collect();

        if kept.is_empty() {
            None
        } else {
            Some(kept.join(CERTIFICATE_SEPARATOR))
        }
    }

    /// Adds the decode results of one bundle
    ///
    /// # Returns
    /// Whether the bundle produced an entry
    pub fn add_bundle(&mut self, bundle: &BundleFile, texts: Vec<DecodedText>) -> bool {
        match Self::join_decoded(texts) {
            Some(joined) => {
                self.index.insert(bundle.path().to_path_buf(), joined);
                true
            }
            None => false,
        }
    }

    pub fn finish(self) -> CertificateIndex {
        self.index
    }
}

use crate::certificate_discovery::services::DEFAULT_BUNDLE_EXTENSION;
use crate::shared::error::CertInventoryError;
use crate::shared::Result;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Environment variable carrying the instance guid
pub const INSTANCE_GUID_ENV: &str = "CF_INSTANCE_GUID";

/// Environment variable carrying the instance index
pub const INSTANCE_INDEX_ENV: &str = "CF_INSTANCE_INDEX";

/// Caller supplied `(guid, index)` lookup
///
/// Two lookups are equal only when they share the same function.
#[derive(Clone)]
pub struct MetadataLookup(Arc<dyn Fn() -> (Option<String>, Option<String>) + Send + Sync>);

impl MetadataLookup {
    pub fn new<F>(lookup: F) -> Self
    where
        F: Fn() -> (Option<String>, Option<String>) + Send + Sync + 'static,
    {
        Self(Arc::new(lookup))
    }

    fn call(&self) -> (Option<String>, Option<String>) {
        (self.0)()
    }
}

impl fmt::Debug for MetadataLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MetadataLookup(..)")
    }
}

impl PartialEq for MetadataLookup {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for MetadataLookup {}

/// Where the instance guid and index come from
///
/// Resolution is deferred until an instance certificate has actually been
/// found, so the environment is never consulted when there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityMetadataSource {
    /// Read `CF_INSTANCE_GUID` / `CF_INSTANCE_INDEX`, falling back to the
    /// given values when a variable is unset
    Environment {
        guid_fallback: Option<String>,
        index_fallback: Option<String>,
    },
    /// Use these values as-is
    Fixed {
        guid: Option<String>,
        index: Option<String>,
    },
    /// Ask a function, called at most once per discovery pass
    Lookup(MetadataLookup),
}

impl Default for IdentityMetadataSource {
    fn default() -> Self {
        IdentityMetadataSource::Environment {
            guid_fallback: None,
            index_fallback: None,
        }
    }
}

impl IdentityMetadataSource {
    /// Returns `(guid, index)`
    pub fn resolve(&self) -> (Option<String>, Option<String>) {
        match self {
            IdentityMetadataSource::Environment {
                guid_fallback,
                index_fallback,
            } => (
                env::var(INSTANCE_GUID_ENV)
                    .ok()
                    .or_else(|| guid_fallback.clone()),
                env::var(INSTANCE_INDEX_ENV)
                    .ok()
                    .or_else(|| index_fallback.clone()),
            ),
            IdentityMetadataSource::Fixed { guid, index } => (guid.clone(), index.clone()),
            IdentityMetadataSource::Lookup(lookup) => lookup.call(),
        }
    }
}

/// DiscoveryRequest - explicit configuration of one discovery pass
#[derive(Debug, Clone)]
pub struct DiscoveryRequest {
    /// Directory holding trusted bundles; `None` yields an empty index
    pub trusted_cert_directory: Option<PathBuf>,
    /// File name suffix selecting bundles (e.g. `.crt`)
    pub bundle_extension: String,
    /// Certificate identifying this instance
    pub instance_cert_file: Option<PathBuf>,
    pub identity_metadata: IdentityMetadataSource,
}

impl DiscoveryRequest {
    pub fn builder() -> DiscoveryRequestBuilder {
        DiscoveryRequestBuilder::default()
    }
}

/// Builder for [`DiscoveryRequest`]
#[derive(Debug, Default)]
pub struct DiscoveryRequestBuilder {
    trusted_cert_directory: Option<PathBuf>,
    bundle_extension: Option<String>,
    instance_cert_file: Option<PathBuf>,
    identity_metadata: Option<IdentityMetadataSource>,
}

impl DiscoveryRequestBuilder {
    pub fn trusted_cert_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.trusted_cert_directory = Some(directory.into());
        self
    }

    pub fn trusted_cert_directory_opt(mut self, directory: Option<PathBuf>) -> Self {
        self.trusted_cert_directory = directory;
        self
    }

    pub fn bundle_extension(mut self, extension: impl Into<String>) -> Self {
        self.bundle_extension = Some(extension.into());
        self
    }

    pub fn instance_cert_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.instance_cert_file = Some(path.into());
        self
    }

    pub fn instance_cert_file_opt(mut self, path: Option<PathBuf>) -> Self {
        self.instance_cert_file = path;
        self
    }

    pub fn identity_metadata(mut self, source: IdentityMetadataSource) -> Self {
        self.identity_metadata = Some(source);
        self
    }

    /// # Errors
    /// Returns a validation error if the bundle extension is empty
    pub fn build(self) -> Result<DiscoveryRequest> {
        let bundle_extension = self
            .bundle_extension
            .unwrap_or_else(|| DEFAULT_BUNDLE_EXTENSION.to_string());

        if bundle_extension.trim().is_empty() {
            return Err(CertInventoryError::Validation {
                message: "Bundle extension must not be empty".to_string(),
            }
            .into());
        }

        Ok(DiscoveryRequest {
            trusted_cert_directory: self.trusted_cert_directory,
            bundle_extension,
            instance_cert_file: self.instance_cert_file,
            identity_metadata: self.identity_metadata.unwrap_or_default(),
        })
    }
}

use crate::certificate_discovery::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// MetadataGenerator service stamping each report with time and a unique id
pub struct MetadataGenerator;

impl MetadataGenerator {
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            report_id,
        )
    }

    /// Metadata for this tool, using the compile-time version from Cargo.toml
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

//! Inventory read model structures

use serde::Serialize;

/// Query-optimized view of one discovery pass
#[derive(Debug, Clone, Serialize)]
pub struct InventoryReadModel {
    pub metadata: ReportMetadataView,
    /// Path-ordered
    pub trusted_certificates: Vec<TrustedCertificateView>,
    pub instance_certificate: Option<InstanceCertificateView>,
    pub decode_failures: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub report_id: String,
}

/// One bundle and the decoded text of its certificates
#[derive(Debug, Clone, Serialize)]
pub struct TrustedCertificateView {
    pub path: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstanceCertificateView {
    pub path: String,
    pub text: String,
    pub guid: Option<String>,
    pub index: Option<String>,
}

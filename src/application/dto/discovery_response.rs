use crate::certificate_discovery::domain::{CertificateIndex, InstanceIdentity, ReportMetadata};

/// DiscoveryResponse - everything one discovery pass produced
#[derive(Debug, Clone)]
pub struct DiscoveryResponse {
    /// Trusted bundles, path-ordered
    pub certificate_index: CertificateIndex,
    /// Present only if the instance certificate exists and decoded
    pub instance_identity: Option<InstanceIdentity>,
    pub metadata: ReportMetadata,
    /// Blocks that timed out or failed to decode and were skipped
    pub decode_failures: usize,
}

impl DiscoveryResponse {
    pub fn new(
        certificate_index: CertificateIndex,
        instance_identity: Option<InstanceIdentity>,
        metadata: ReportMetadata,
        decode_failures: usize,
    ) -> Self {
        Self {
            certificate_index,
            instance_identity,
            metadata,
            decode_failures,
        }
    }
}

//! Builder for constructing InventoryReadModel from a discovery response

use super::inventory_read_model::{
    InstanceCertificateView, InventoryReadModel, ReportMetadataView, TrustedCertificateView,
};
use crate::application::dto::DiscoveryResponse;
use crate::certificate_discovery::domain::{CertificateIndex, InstanceIdentity, ReportMetadata};

pub struct InventoryReadModelBuilder;

impl InventoryReadModelBuilder {
    pub fn build(response: &DiscoveryResponse) -> InventoryReadModel {
        InventoryReadModel {
            metadata: Self::build_metadata(&response.metadata),
            trusted_certificates: Self::build_trusted(&response.certificate_index),
            instance_certificate: response
                .instance_identity
                .as_ref()
                .map(Self::build_instance),
            decode_failures: response.decode_failures,
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            report_id: metadata.report_id().to_string(),
        }
    }

    fn build_trusted(index: &CertificateIndex) -> Vec<TrustedCertificateView> {
        index
            .iter()
            .map(|(path, text)| TrustedCertificateView {
                path: path.display().to_string(),
                text: text.to_string(),
            })
            .collect()
    }

    fn build_instance(identity: &InstanceIdentity) -> InstanceCertificateView {
        InstanceCertificateView {
            path: identity.certificate_path().display().to_string(),
            text: identity.decoded_text().to_string(),
            guid: identity.guid().map(String::from),
            index: identity.index().map(String::from),
        }
    }
}

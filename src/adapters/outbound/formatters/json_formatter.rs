use crate::application::read_models::InventoryReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter serializing the inventory read model as pretty JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &InventoryReadModel) -> Result<String> {
        let mut json = serde_json::to_string_pretty(model)
            .map_err(|e| anyhow::anyhow!("Failed to serialize inventory to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{
        InstanceCertificateView, ReportMetadataView, TrustedCertificateView,
    };
    use serde_json::Value;

    fn model(instance: Option<InstanceCertificateView>) -> InventoryReadModel {
        InventoryReadModel {
            metadata: ReportMetadataView {
                timestamp: "2024-01-01T00:00:00Z".to_string(),
                tool_name: "cert-inventory".to_string(),
                tool_version: "0.1.0".to_string(),
                report_id: "urn:uuid:1234".to_string(),
            },
            trusted_certificates: vec![
                TrustedCertificateView {
                    path: "/certs/a.crt".to_string(),
                    text: "Subject: CN=alpha".to_string(),
                },
                TrustedCertificateView {
                    path: "/certs/b.crt".to_string(),
                    text: "Subject: CN=beta\nSubject: CN=gamma".to_string(),
                },
            ],
            instance_certificate: instance,
            decode_failures: 0,
        }
    }

    #[test]
    fn test_format_json_structure() {
        let output = JsonFormatter::new().format(&model(None)).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["metadata"]["tool_name"], "cert-inventory");
        assert_eq!(value["trusted_certificates"][0]["path"], "/certs/a.crt");
        assert_eq!(
            value["trusted_certificates"][1]["text"],
            "Subject: CN=beta\nSubject: CN=gamma"
        );
        assert!(value["instance_certificate"].is_null());
        assert_eq!(value["decode_failures"], 0);
    }

    #[test]
    fn test_format_json_with_instance() {
        let output = JsonFormatter::new()
            .format(&model(Some(InstanceCertificateView {
                path: "/instance.crt".to_string(),
                text: "Subject: CN=instance".to_string(),
                guid: Some("guid".to_string()),
                index: Some("0".to_string()),
            })))
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["instance_certificate"]["guid"], "guid");
        assert_eq!(value["instance_certificate"]["index"], "0");
        assert!(output.ends_with("}\n"));
    }
}

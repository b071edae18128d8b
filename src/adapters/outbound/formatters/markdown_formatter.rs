use crate::application::read_models::{
    InstanceCertificateView, InventoryReadModel, TrustedCertificateView,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for instance metadata
const TABLE_HEADER: &str = "| Field | Value |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|-------|-------|\n";

/// MarkdownFormatter adapter rendering the inventory as a Markdown document
///
/// Every decoded certificate is placed in a fenced `text` block, one
/// section per bundle path, in path order.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Fence long enough that no backtick run inside `text` can close it
    fn fence_for(text: &str) -> String {
        let longest_run = text
            .split(|c| c != '`')
            .map(str::len)
            .max()
            .unwrap_or(0);
        "`".repeat(longest_run.max(2) + 1)
    }

    fn push_fenced(output: &mut String, text: &str) {
        let fence = Self::fence_for(text);
        output.push_str(&format!("{}text\n", fence));
        output.push_str(text);
        if !text.ends_with('\n') {
            output.push('\n');
        }
        output.push_str(&format!("{}\n\n", fence));
    }

    fn render_header(output: &mut String, model: &InventoryReadModel) {
        output.push_str("# Certificate Inventory\n\n");
        output.push_str(&format!("- Generated: {}\n", model.metadata.timestamp));
        output.push_str(&format!(
            "- Tool: {} {}\n",
            model.metadata.tool_name, model.metadata.tool_version
        ));
        output.push_str(&format!("- Report ID: {}\n\n", model.metadata.report_id));

        if model.decode_failures > 0 {
            output.push_str(&format!(
                "> ⚠️ {} certificate(s) could not be decoded and were skipped.\n\n",
                model.decode_failures
            ));
        }
    }

    fn render_trusted(output: &mut String, certificates: &[TrustedCertificateView]) {
        output.push_str("## Trusted Certificates\n\n");

        if certificates.is_empty() {
            output.push_str("No trusted certificates found.\n\n");
            return;
        }

        output.push_str(&format!("{} bundle file(s)\n\n", certificates.len()));
        for certificate in certificates {
            output.push_str(&format!("### `{}`\n\n", certificate.path));
            Self::push_fenced(output, &certificate.text);
        }
    }

    fn render_instance(output: &mut String, instance: Option<&InstanceCertificateView>) {
        output.push_str("## Instance Certificate\n\n");

        let Some(instance) = instance else {
            output.push_str("No instance certificate available.\n\n");
            return;
        };

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        output.push_str(&format!(
            "| Path | {} |\n",
            Self::escape_markdown_table_cell(&instance.path)
        ));
        output.push_str(&format!(
            "| GUID | {} |\n",
            Self::escape_markdown_table_cell(instance.guid.as_deref().unwrap_or("-"))
        ));
        output.push_str(&format!(
            "| Index | {} |\n\n",
            Self::escape_markdown_table_cell(instance.index.as_deref().unwrap_or("-"))
        ));
        Self::push_fenced(output, &instance.text);
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &InventoryReadModel) -> Result<String> {
        let mut output = String::new();

        Self::render_header(&mut output, model);
        Self::render_trusted(&mut output, &model.trusted_certificates);
        Self::render_instance(&mut output, model.instance_certificate.as_ref());

        Ok(output.trim_end().to_string() + "\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::ReportMetadataView;

    fn model(
        trusted: Vec<TrustedCertificateView>,
        instance: Option<InstanceCertificateView>,
        decode_failures: usize,
    ) -> InventoryReadModel {
        InventoryReadModel {
            metadata: ReportMetadataView {
                timestamp: "2024-01-01T00:00:00Z".to_string(),
                tool_name: "cert-inventory".to_string(),
                tool_version: "0.1.0".to_string(),
                report_id: "urn:uuid:1234".to_string(),
            },
            trusted_certificates: trusted,
            instance_certificate: instance,
            decode_failures,
        }
    }

    fn trusted(path: &str, text: &str) -> TrustedCertificateView {
        TrustedCertificateView {
            path: path.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_format_trusted_certificates_in_order() {
        let output = MarkdownFormatter::new()
            .format(&model(
                vec![
                    trusted("/certs/a.crt", "Subject: CN=alpha\n"),
                    trusted("/certs/b.crt", "Subject: CN=beta\n"),
                ],
                None,
                0,
            ))
            .unwrap();

        assert!(output.starts_with("# Certificate Inventory\n"));
        assert!(output.contains("- Report ID: urn:uuid:1234"));
        assert!(output.contains("2 bundle file(s)"));
        let a = output.find("### `/certs/a.crt`").unwrap();
        let b = output.find("### `/certs/b.crt`").unwrap();
        assert!(a < b);
        assert!(output.contains("```text\nSubject: CN=alpha\n```"));
        assert!(output.contains("No instance certificate available."));
        assert!(!output.contains("could not be decoded"));
    }

    #[test]
    fn test_format_empty_inventory() {
        let output = MarkdownFormatter::new()
            .format(&model(vec![], None, 0))
            .unwrap();
        assert!(output.contains("No trusted certificates found."));
        assert!(output.ends_with("No instance certificate available.\n"));
    }

    #[test]
    fn test_format_instance_certificate() {
        let instance = InstanceCertificateView {
            path: "/etc/cf-instance-credentials/instance.crt".to_string(),
            text: "Subject: CN=instance".to_string(),
            guid: Some("guid|with|pipes".to_string()),
            index: None,
        };
        let output = MarkdownFormatter::new()
            .format(&model(vec![], Some(instance), 0))
            .unwrap();

        assert!(output.contains("| Path | /etc/cf-instance-credentials/instance.crt |"));
        assert!(output.contains("| GUID | guid\\|with\\|pipes |"));
        assert!(output.contains("| Index | - |"));
        assert!(output.contains("```text\nSubject: CN=instance\n```"));
    }

    #[test]
    fn test_format_reports_decode_failures() {
        let output = MarkdownFormatter::new()
            .format(&model(vec![], None, 2))
            .unwrap();
        assert!(output.contains("2 certificate(s) could not be decoded"));
    }

    #[test]
    fn test_fence_grows_past_backticks_in_text() {
        assert_eq!(MarkdownFormatter::fence_for("plain"), "```");
        assert_eq!(MarkdownFormatter::fence_for("a ``` b"), "````");
        assert_eq!(MarkdownFormatter::fence_for("`````"), "``````");
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }
}

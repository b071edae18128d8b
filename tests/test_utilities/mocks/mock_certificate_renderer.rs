use async_trait::async_trait;
use cert_inventory::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock CertificateRenderer for testing
///
/// Renders a block as `Decoded <first body line>`. A block whose first body
/// line is registered with `with_timeout` or `with_failure` fails instead.
#[derive(Default, Clone)]
pub struct MockCertificateRenderer {
    timeouts: Vec<String>,
    failures: Vec<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockCertificateRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, body: &str) -> Self {
        self.timeouts.push(body.to_string());
        self
    }

    pub fn with_failure(mut self, body: &str) -> Self {
        self.failures.push(body.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn body(block: &CertificateBlock) -> String {
        block.lines().get(1).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl CertificateRenderer for MockCertificateRenderer {
    async fn render(&self, block: &CertificateBlock) -> std::result::Result<DecodedText, DecodeError> {
        let body = Self::body(block);
        self.calls.lock().unwrap().push(body.clone());

        if self.timeouts.contains(&body) {
            return Err(DecodeError::TimedOut {
                timeout: Duration::from_secs(10),
            });
        }
        if self.failures.contains(&body) {
            return Err(DecodeError::Failed {
                status: "exit status: 1".to_string(),
                stderr: "unable to load certificate".to_string(),
            });
        }

        Ok(DecodedText::new(format!("Decoded {}", body)))
    }
}

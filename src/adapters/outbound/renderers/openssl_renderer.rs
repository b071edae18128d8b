use crate::certificate_discovery::domain::{CertificateBlock, DecodedText};
use crate::ports::outbound::CertificateRenderer;
use crate::shared::error::DecodeError;
use async_trait::async_trait;
use std::ffi::OsString;
use std::io::Write;
use std::process::Stdio;
use std::time::Duration;
use tempfile::NamedTempFile;
use tokio::process::Command;

/// Wait ceiling for a single `openssl x509` invocation
pub const DEFAULT_DECODE_TIMEOUT: Duration = Duration::from_secs(10);

/// Program looked up on PATH when none is configured
pub const DEFAULT_OPENSSL_PROGRAM: &str = "openssl";

/// OpensslCertificateRenderer adapter decoding certificates with `openssl x509`
///
/// Each block is staged in its own uniquely named temporary file which is
/// removed when the staging handle drops, on success, failure and timeout
/// alike. The child process is killed if the wait is abandoned.
pub struct OpensslCertificateRenderer {
    program: OsString,
    timeout: Duration,
}

impl OpensslCertificateRenderer {
    pub fn new() -> Self {
        Self {
            program: OsString::from(DEFAULT_OPENSSL_PROGRAM),
            timeout: DEFAULT_DECODE_TIMEOUT,
        }
    }

    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn stage_block(block: &CertificateBlock) -> Result<NamedTempFile, DecodeError> {
        let mut staged = tempfile::Builder::new()
            .prefix("cert-")
            .suffix(".pem")
            .tempfile()?;
        staged.write_all(block.to_pem().as_bytes())?;
        staged.flush()?;
        Ok(staged)
    }

    fn build_command(&self, staged: &NamedTempFile) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("x509")
            .arg("-in")
            .arg(staged.path())
            .arg("-text")
            .arg("-noout")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

impl Default for OpensslCertificateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CertificateRenderer for OpensslCertificateRenderer {
    async fn render(&self, block: &CertificateBlock) -> Result<DecodedText, DecodeError> {
        let staged = Self::stage_block(block)?;

        let child = self
            .build_command(&staged)
            .spawn()
            .map_err(|source| DecodeError::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        // Dropping the wait future on timeout drops the child, which kills it
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(output) => output?,
            Err(_) => {
                return Err(DecodeError::TimedOut {
                    timeout: self.timeout,
                })
            }
        };

        if !output.status.success() {
            return Err(DecodeError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(DecodedText::new(
            String::from_utf8_lossy(&output.stdout).into_owned(),
        ))
    }
}

use crate::certificate_discovery::domain::{CertificateBlock, DecodedText};
use crate::shared::error::DecodeError;
use async_trait::async_trait;

/// CertificateRenderer port turning one PEM record into readable text
///
/// Implementations must bound the time spent on a single block and
/// report abandonment as [`DecodeError::TimedOut`].
#[async_trait]
pub trait CertificateRenderer: Send + Sync {
    /// Renders one certificate block
    ///
    /// # Errors
    /// * `TimedOut` / `Failed` - this block could not be decoded
    /// * `Spawn` / `Io` - the decode operation itself is unavailable
    async fn render(&self, block: &CertificateBlock) -> Result<DecodedText, DecodeError>;
}

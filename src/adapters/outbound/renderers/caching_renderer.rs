use crate::certificate_discovery::domain::{CertificateBlock, DecodedText};
use crate::ports::outbound::CertificateRenderer;
use crate::shared::error::DecodeError;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingCertificateRenderer wraps a CertificateRenderer with an in-memory memo.
///
/// Keyed by the exact PEM text of the block, so the same certificate found
/// in several bundles (or as both a trusted and an instance certificate) is
/// decoded once. Failures are not cached. The cache lives as long as the
/// renderer; nothing is persisted.
pub struct CachingCertificateRenderer<R: CertificateRenderer> {
    inner: R,
    cache: Arc<DashMap<String, DecodedText>>,
}

impl<R: CertificateRenderer> CachingCertificateRenderer<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: CertificateRenderer> CertificateRenderer for CachingCertificateRenderer<R> {
    async fn render(&self, block: &CertificateBlock) -> Result<DecodedText, DecodeError> {
        let key = block.to_pem();

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        let text = self.inner.render(block).await?;
        self.cache.insert(key, text.clone());

        Ok(text)
    }
}

use crate::application::dto::{DiscoveryRequest, DiscoveryResponse};
use crate::certificate_discovery::domain::{
    BundleFile, CertificateIndex, DecodedText, InstanceIdentity,
};
use crate::certificate_discovery::services::{
    BundleDirectoryScanner, MetadataGenerator, PemBundleSplitter, ResultAggregator,
};
use crate::ports::outbound::{BundleReader, CertificateRenderer, ProgressReporter};
use crate::shared::error::CertInventoryError;
use crate::shared::Result;
use std::path::Path;

/// DiscoverCertificatesUseCase - the discovery and decoding pipeline
///
/// Scans the trusted directory, splits every bundle into PEM records,
/// decodes each record and aggregates the text per bundle. The instance
/// certificate is resolved independently through the same split/decode
/// path. Everything runs sequentially and nothing is kept between runs.
///
/// # Type Parameters
/// * `BR` - BundleReader implementation
/// * `CR` - CertificateRenderer implementation
/// * `PR` - ProgressReporter implementation
pub struct DiscoverCertificatesUseCase<BR, CR, PR> {
    bundle_reader: BR,
    renderer: CR,
    progress_reporter: PR,
}

impl<BR, CR, PR> DiscoverCertificatesUseCase<BR, CR, PR>
where
    BR: BundleReader,
    CR: CertificateRenderer,
    PR: ProgressReporter,
{
    /// Creates a new DiscoverCertificatesUseCase with injected dependencies
    pub fn new(bundle_reader: BR, renderer: CR, progress_reporter: PR) -> Self {
        Self {
            bundle_reader,
            renderer,
            progress_reporter,
        }
    }

    /// Executes one discovery pass
    ///
    /// Missing configuration, missing directories and undecodable blocks
    /// only produce warnings. Unreadable bundles and an unusable decode
    /// program abort the pass.
    pub async fn execute(&self, request: DiscoveryRequest) -> Result<DiscoveryResponse> {
        let mut decode_failures = 0;

        // Step 1: Find candidate bundles
        let bundles = self.scan_trusted_directory(&request)?;

        // Step 2: Split, decode and aggregate
        let certificate_index = self
            .build_certificate_index(&bundles, &mut decode_failures)
            .await?;

        // Step 3: Instance certificate, independent of the trusted directory
        let instance_identity = self
            .resolve_instance_identity(&request, &mut decode_failures)
            .await?;

        Ok(DiscoveryResponse::new(
            certificate_index,
            instance_identity,
            MetadataGenerator::generate_default_metadata(),
            decode_failures,
        ))
    }

    fn scan_trusted_directory(&self, request: &DiscoveryRequest) -> Result<Vec<BundleFile>> {
        let Some(directory) = request.trusted_cert_directory.as_deref() else {
            self.progress_reporter
                .report_warning("Trusted certificate directory is not configured");
            return Ok(Vec::new());
        };

        self.progress_reporter.report(&format!(
            "📂 Scanning trusted certificate directory: {}",
            directory.display()
        ));

        let Some(entries) = self.bundle_reader.list_directory(directory)? else {
            self.progress_reporter.report_warning(&format!(
                "Trusted certificate directory not found: {}",
                directory.display()
            ));
            return Ok(Vec::new());
        };

        let bundles = BundleDirectoryScanner::select_bundles(entries, &request.bundle_extension);
        self.progress_reporter.report(&format!(
            "✅ Found {} bundle file(s) matching *{}",
            bundles.len(),
            request.bundle_extension
        ));

        Ok(bundles)
    }

    async fn build_certificate_index(
        &self,
        bundles: &[BundleFile],
        decode_failures: &mut usize,
    ) -> Result<CertificateIndex> {
        let total = bundles.len();
        let mut aggregator = ResultAggregator::new();

        for (idx, bundle) in bundles.iter().enumerate() {
            self.progress_reporter
                .report_progress(idx, total, Some(bundle.display_name().as_str()));

            let texts = self.decode_bundle(bundle.path(), decode_failures).await?;
            aggregator.add_bundle(bundle, texts);
        }

        if total > 0 {
            self.progress_reporter.report_progress(total, total, None);
        }

        let index = aggregator.finish();
        if index.is_empty() {
            self.progress_reporter.report_warning("No certificates found");
        }
        self.progress_reporter.report_completion(&format!(
            "✅ Decoded certificates from {} of {} bundle file(s)",
            index.len(),
            total
        ));

        Ok(index)
    }

    /// Splits one bundle and decodes its blocks in file order
    ///
    /// Blocks that time out or fail are skipped and counted.
    async fn decode_bundle(
        &self,
        path: &Path,
        decode_failures: &mut usize,
    ) -> Result<Vec<DecodedText>> {
        let content = self.bundle_reader.read_bundle(path)?;
        let blocks = PemBundleSplitter::split(&content);

        let mut texts = Vec::with_capacity(blocks.len());
        for (position, block) in blocks.iter().enumerate() {
            match self.renderer.render(block).await {
                Ok(text) => texts.push(text),
                Err(e) if e.is_fatal() => {
                    return Err(CertInventoryError::DecodeAborted {
                        path: path.to_path_buf(),
                        source: e,
                    }
                    .into());
                }
                Err(e) => {
                    *decode_failures += 1;
                    self.progress_reporter.report_warning(&format!(
                        "Skipping certificate #{} in {}: {}",
                        position + 1,
                        path.display(),
                        e
                    ));
                }
            }
        }

        Ok(texts)
    }

    async fn resolve_instance_identity(
        &self,
        request: &DiscoveryRequest,
        decode_failures: &mut usize,
    ) -> Result<Option<InstanceIdentity>> {
        let Some(path) = request.instance_cert_file.as_deref() else {
            return Ok(None);
        };

        if !self.bundle_reader.bundle_exists(path) {
            self.progress_reporter.report_warning(&format!(
                "Instance certificate not found: {}",
                path.display()
            ));
            return Ok(None);
        }

        self.progress_reporter.report(&format!(
            "🔑 Reading instance certificate: {}",
            path.display()
        ));

        let texts = self.decode_bundle(path, decode_failures).await?;
        let Some(decoded_text) = ResultAggregator::join_decoded(texts) else {
            self.progress_reporter.report_warning(&format!(
                "Instance certificate {} did not yield any decodable certificate",
                path.display()
            ));
            return Ok(None);
        };

        let (guid, index) = request.identity_metadata.resolve();
        Ok(Some(InstanceIdentity::new(
            path.to_path_buf(),
            decoded_text,
            guid,
            index,
        )))
    }
}

/// Mock implementations for testing
mod mock_bundle_reader;
mod mock_certificate_renderer;
mod mock_progress_reporter;

pub use mock_bundle_reader::MockBundleReader;
pub use mock_certificate_renderer::MockCertificateRenderer;
pub use mock_progress_reporter::MockProgressReporter;

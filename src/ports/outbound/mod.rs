/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, decode program, console).
pub mod bundle_reader;
pub mod certificate_renderer;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use bundle_reader::BundleReader;
pub use certificate_renderer::CertificateRenderer;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;

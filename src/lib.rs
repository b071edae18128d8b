//! cert-inventory - X.509 certificate inventory for application hosts
//!
//! This library discovers PEM certificate bundles in a trusted directory,
//! splits them into individual certificates, renders each one as text with
//! `openssl x509 -text` and reports the result per bundle path, together with
//! the decoded instance identity certificate when one is present.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`certificate_discovery`): Bundle splitting, selection and aggregation
//! - **Application Layer** (`application`): Use cases, DTOs, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Filesystem, openssl, console and formatter implementations
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cert_inventory::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let use_case = DiscoverCertificatesUseCase::new(
//!     FileSystemBundleReader::new(),
//!     OpensslCertificateRenderer::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = DiscoveryRequest::builder()
//!     .trusted_cert_directory("/etc/ssl/certs")
//!     .bundle_extension(".pem")
//!     .build()?;
//! let response = use_case.execute(request).await?;
//!
//! let model = InventoryReadModelBuilder::build(&response);
//! println!("{}", MarkdownFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod certificate_discovery;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemBundleReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::renderers::{
        CachingCertificateRenderer, OpensslCertificateRenderer,
    };
    pub use crate::application::dto::{
        DiscoveryRequest, DiscoveryResponse, IdentityMetadataSource, MetadataLookup, OutputFormat,
    };
    pub use crate::application::read_models::{InventoryReadModel, InventoryReadModelBuilder};
    pub use crate::application::use_cases::DiscoverCertificatesUseCase;
    pub use crate::certificate_discovery::domain::{
        BundleFile, CertificateBlock, CertificateIndex, DecodedText, InstanceIdentity,
        ReportMetadata,
    };
    pub use crate::certificate_discovery::services::{
        BundleDirectoryScanner, PemBundleSplitter, ResultAggregator,
    };
    pub use crate::ports::outbound::{
        BundleReader, CertificateRenderer, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::{CertInventoryError, DecodeError};
    pub use crate::shared::Result;
}

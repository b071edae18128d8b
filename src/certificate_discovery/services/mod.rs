mod bundle_directory_scanner;
mod metadata_generator;
mod pem_bundle_splitter;
mod result_aggregator;

pub use bundle_directory_scanner::{BundleDirectoryScanner, DEFAULT_BUNDLE_EXTENSION};
pub use metadata_generator::MetadataGenerator;
pub use pem_bundle_splitter::PemBundleSplitter;
pub use result_aggregator::ResultAggregator;

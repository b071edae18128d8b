/// Filesystem adapters for bundle discovery and report output
mod bundle_reader;
mod file_writer;

pub use bundle_reader::FileSystemBundleReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};

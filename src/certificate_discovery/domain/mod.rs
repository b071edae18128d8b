mod bundle_file;
mod certificate_block;
mod certificate_index;
mod decoded_text;
mod instance_identity;
mod report_metadata;

pub use bundle_file::BundleFile;
pub use certificate_block::{CertificateBlock, END_MARKER};
pub use certificate_index::CertificateIndex;
pub use decoded_text::DecodedText;
pub use instance_identity::InstanceIdentity;
pub use report_metadata::ReportMetadata;

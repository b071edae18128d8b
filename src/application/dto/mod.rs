/// Data Transfer Objects for application layer
mod discovery_request;
mod discovery_response;
mod output_format;

pub use discovery_request::{
    DiscoveryRequest, DiscoveryRequestBuilder, IdentityMetadataSource, MetadataLookup,
    INSTANCE_GUID_ENV, INSTANCE_INDEX_ENV,
};
pub use discovery_response::DiscoveryResponse;
pub use output_format::OutputFormat;

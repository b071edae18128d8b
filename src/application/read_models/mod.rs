//! Read models for the inventory report
//!
//! View-optimized structs that formatters consume, decoupled from the
//! domain types they are built from.

mod inventory_read_model;
mod inventory_read_model_builder;

pub use inventory_read_model::{
    InstanceCertificateView, InventoryReadModel, ReportMetadataView, TrustedCertificateView,
};
pub use inventory_read_model_builder::InventoryReadModelBuilder;

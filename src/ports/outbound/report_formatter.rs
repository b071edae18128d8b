use crate::application::read_models::InventoryReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering the inventory report
pub trait ReportFormatter {
    /// Formats the inventory read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &InventoryReadModel) -> Result<String>;
}

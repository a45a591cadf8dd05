//! Catalog source port definition.

use crate::domain::{AppError, ToolCatalog};

/// Trait for obtaining a tool catalog.
///
/// A source yields a complete catalog or an error; the core never consumes a
/// partially valid document.
pub trait CatalogSource {
    /// Load the catalog.
    fn load(&self) -> Result<ToolCatalog, AppError>;
}

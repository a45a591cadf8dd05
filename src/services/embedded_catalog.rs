//! Embedded catalog service - the default catalog compiled into the binary.

use include_dir::{Dir, include_dir};

use crate::domain::{AppError, ToolCatalog};
use crate::ports::CatalogSource;

/// Embedded catalog directory.
static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/catalog");

/// Catalog shipped with the binary.
#[derive(Debug, Default)]
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogSource for EmbeddedCatalog {
    fn load(&self) -> Result<ToolCatalog, AppError> {
        let file = CATALOG_DIR
            .get_file("tools.json")
            .ok_or_else(|| AppError::config_error("Embedded catalog asset is missing"))?;
        let content = file
            .contents_utf8()
            .ok_or_else(|| AppError::config_error("Embedded catalog is not valid UTF-8"))?;
        let catalog: ToolCatalog = serde_json::from_str(content)?;
        Ok(catalog)
    }
}

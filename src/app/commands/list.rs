//! List command - surfaces the catalog with availability markers.

use crate::domain::{AppError, PackageManager, visible_categories};
use crate::ports::CatalogSource;

/// One category as shown by `list`.
#[derive(Debug, Clone)]
pub struct CategoryListing {
    pub category: String,
    pub tools: Vec<ToolListing>,
}

/// One tool row: availability is evaluated against the active manager.
#[derive(Debug, Clone)]
pub struct ToolListing {
    pub name: String,
    pub available: bool,
}

/// Detailed information for a single tool.
#[derive(Debug, Clone)]
pub struct ToolDetail {
    pub name: String,
    pub category: String,
    pub iconsrc: String,
    /// Every recorded install command, in manager declaration order.
    pub commands: Vec<(PackageManager, String)>,
}

/// Execute the list command.
///
/// Applies the display filter: categories with no visible tool are omitted.
pub fn execute(
    source: &dyn CatalogSource,
    manager: PackageManager,
    search: &str,
) -> Result<Vec<CategoryListing>, AppError> {
    let catalog = source.load()?;

    Ok(visible_categories(&catalog, search)
        .into_iter()
        .map(|(category, tools)| CategoryListing {
            category: category.category.clone(),
            tools: tools
                .into_iter()
                .map(|tool| ToolListing {
                    name: tool.name.clone(),
                    available: tool.is_available_for(manager),
                })
                .collect(),
        })
        .collect())
}

/// Execute the list --detail command.
pub fn execute_detail(source: &dyn CatalogSource, name: &str) -> Result<ToolDetail, AppError> {
    let catalog = source.load()?;

    let (category, tool) = catalog.find_tool(name).ok_or_else(|| AppError::ToolNotFound {
        name: name.to_string(),
        available: catalog.tool_names().collect::<Vec<_>>().join(", "),
    })?;

    Ok(ToolDetail {
        name: tool.name.clone(),
        category: category.category.clone(),
        iconsrc: tool.iconsrc.clone(),
        commands: tool.install.entries().map(|(manager, command)| (manager, command.to_string())).collect(),
    })
}

//! Script rendering and display filtering.
//!
//! Both functions are pure. Rendering depends only on catalog order and the
//! active manager; a selected tool with no usable command is skipped
//! silently, and unknown selected names contribute nothing. Filtering is a
//! display concern and never affects the rendered script.

use std::collections::BTreeSet;

use crate::domain::catalog::{Tool, ToolCatalog, ToolCategory};
use crate::domain::platform::PackageManager;
use crate::domain::selection::SelectionState;

/// Render the install script for a selection.
///
/// Walks the catalog in document order, category by category, and emits the
/// command of every selected tool that has one for `manager`, joined by
/// newlines. No trailing newline; an empty selection renders as the empty
/// string.
pub fn generate_script(
    catalog: &ToolCatalog,
    selected: &BTreeSet<String>,
    manager: PackageManager,
) -> String {
    let mut commands = Vec::new();
    for category in catalog.categories() {
        for tool in &category.tools {
            if !selected.contains(&tool.name) {
                continue;
            }
            if let Some(command) = tool.install.command_for(manager) {
                commands.push(command);
            }
        }
    }
    commands.join("\n")
}

/// Render the script for a live session.
pub fn render_selection(catalog: &ToolCatalog, state: &SelectionState) -> String {
    generate_script(catalog, state.selected_tools(), state.package_manager())
}

/// Categories paired with their visible tools under a search query
/// (case-insensitive substring on the tool name). Categories left empty by
/// the filter are omitted entirely.
pub fn visible_categories<'a>(
    catalog: &'a ToolCatalog,
    query: &str,
) -> Vec<(&'a ToolCategory, Vec<&'a Tool>)> {
    let needle = query.to_lowercase();
    catalog
        .categories()
        .iter()
        .filter_map(|category| {
            let tools: Vec<&Tool> = category
                .tools
                .iter()
                .filter(|tool| tool.name.to_lowercase().contains(&needle))
                .collect();
            if tools.is_empty() { None } else { Some((category, tools)) }
        })
        .collect()
}

//! Tool catalog domain model.
//!
//! The catalog is read-only once loaded. Category and tool order is document
//! order; no layer re-sorts it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::platform::PackageManager;

/// Per-manager install commands for one tool.
///
/// Sparse: a manager may have no entry at all. An entry that is present but
/// empty is kept verbatim, yet counts as unavailable at lookup time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstallCommands(BTreeMap<PackageManager, String>);

impl InstallCommands {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, manager: PackageManager, command: impl Into<String>) {
        self.0.insert(manager, command.into());
    }

    /// The usable install command for a manager, if present and non-empty.
    pub fn command_for(&self, manager: PackageManager) -> Option<&str> {
        self.0.get(&manager).map(String::as_str).filter(|command| !command.is_empty())
    }

    /// Every recorded entry, usable or not, in manager declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (PackageManager, &str)> {
        self.0.iter().map(|(manager, command)| (*manager, command.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One installable tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    /// Opaque icon locator carried through from the source sheet; never validated.
    #[serde(default)]
    pub iconsrc: String,
    #[serde(default)]
    pub install: InstallCommands,
}

impl Tool {
    /// Whether this tool has a usable command for the given manager.
    pub fn is_available_for(&self, manager: PackageManager) -> bool {
        self.install.command_for(manager).is_some()
    }
}

/// A named group of tools, rendered in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCategory {
    pub category: String,
    pub tools: Vec<Tool>,
}

/// The full ordered catalog, deserialized from a JSON array of categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolCatalog(Vec<ToolCategory>);

impl ToolCatalog {
    pub fn new(categories: Vec<ToolCategory>) -> Self {
        Self(categories)
    }

    pub fn categories(&self) -> &[ToolCategory] {
        &self.0
    }

    /// First tool with the given name, searching in catalog order.
    pub fn find_tool(&self, name: &str) -> Option<(&ToolCategory, &Tool)> {
        self.0.iter().find_map(|category| {
            category.tools.iter().find(|tool| tool.name == name).map(|tool| (category, tool))
        })
    }

    /// All tool names, in catalog order.
    pub fn tool_names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().flat_map(|category| category.tools.iter().map(|tool| tool.name.as_str()))
    }

    pub fn category_count(&self) -> usize {
        self.0.len()
    }

    pub fn tool_count(&self) -> usize {
        self.0.iter().map(|category| category.tools.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

//! Interactive selection state.

use std::collections::BTreeSet;

use crate::domain::error::AppError;
use crate::domain::platform::{OperatingSystem, PackageManager};

/// The mutable state of one selection session.
///
/// Invariant: the active manager always belongs to the active operating
/// system, and the selection is cleared whenever either changes. Availability
/// is never checked here; it is re-evaluated by the renderer at use time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    os: OperatingSystem,
    manager: PackageManager,
    selected: BTreeSet<String>,
    search: String,
}

impl SelectionState {
    /// Start a session targeting the given operating system and its default manager.
    pub fn new(os: OperatingSystem) -> Self {
        Self {
            os,
            manager: os.default_package_manager(),
            selected: BTreeSet::new(),
            search: String::new(),
        }
    }

    pub fn operating_system(&self) -> OperatingSystem {
        self.os
    }

    pub fn package_manager(&self) -> PackageManager {
        self.manager
    }

    pub fn selected_tools(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn search_query(&self) -> &str {
        &self.search
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    /// Switch operating system: resets the manager to the OS default and
    /// clears the selection.
    pub fn set_operating_system(&mut self, os: OperatingSystem) {
        self.os = os;
        self.manager = os.default_package_manager();
        self.selected.clear();
    }

    /// Switch package manager within the active operating system.
    ///
    /// A manager belonging to another OS is rejected. Clears the selection on
    /// success, since availability differs between managers.
    pub fn set_package_manager(&mut self, manager: PackageManager) -> Result<(), AppError> {
        if manager.operating_system() != self.os {
            return Err(AppError::ManagerNotForOs { manager, os: self.os });
        }
        self.manager = manager;
        self.selected.clear();
        Ok(())
    }

    /// Toggle a tool name in or out of the selection.
    ///
    /// No catalog or availability check: an unknown or unavailable name simply
    /// contributes nothing at render time.
    pub fn toggle_tool(&mut self, name: &str) {
        if !self.selected.remove(name) {
            self.selected.insert(name.to_string());
        }
    }

    /// Replace the search query verbatim; matching is case-insensitive at
    /// filter time, never applied to the stored value.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(OperatingSystem::Windows)
    }
}

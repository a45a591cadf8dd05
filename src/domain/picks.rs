//! Picks file: a YAML description of a non-interactive selection.
//!
//! ```yaml
//! os: windows
//! pkg: choco
//! tools:
//!   - node
//!   - git
//! ```
//!
//! Both `os` and `pkg` are optional; a missing `pkg` falls back to the
//! default manager of `os`, and a missing `os` to windows.

use serde::Deserialize;

use crate::domain::error::AppError;
use crate::domain::platform::{OperatingSystem, PackageManager};

/// Parsed picks file.
#[derive(Debug, Clone, Deserialize)]
pub struct PicksFile {
    #[serde(default)]
    pub os: Option<OperatingSystem>,
    #[serde(default)]
    pub pkg: Option<PackageManager>,
    pub tools: Vec<String>,
}

impl PicksFile {
    /// Parse from YAML content and validate the os/manager pairing.
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        let picks: PicksFile = serde_yaml::from_str(content)?;

        if picks.tools.is_empty() {
            return Err(AppError::EmptyPicks);
        }
        if let (Some(os), Some(pkg)) = (picks.os, picks.pkg) {
            if pkg.operating_system() != os {
                return Err(AppError::ManagerNotForOs { manager: pkg, os });
            }
        }
        Ok(picks)
    }

    /// The manager this picks file targets.
    pub fn package_manager(&self) -> PackageManager {
        match (self.pkg, self.os) {
            (Some(pkg), _) => pkg,
            (None, Some(os)) => os.default_package_manager(),
            (None, None) => OperatingSystem::Windows.default_package_manager(),
        }
    }
}

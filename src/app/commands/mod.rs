//! Command implementations.

pub mod convert;
pub mod generate;
pub mod interactive;
pub mod list;

use crate::domain::{AppError, OperatingSystem, PackageManager};

/// Resolve the target manager from optional `--os`/`--pkg` inputs.
///
/// A manager given without an OS implies its owning OS; a manager that does
/// not belong to an explicitly given OS is rejected. With neither input the
/// default is windows and its first manager.
pub fn resolve_manager(os: Option<&str>, pkg: Option<&str>) -> Result<PackageManager, AppError> {
    let os = os.map(OperatingSystem::parse).transpose()?;
    let manager = pkg.map(PackageManager::parse).transpose()?;

    match (os, manager) {
        (Some(os), Some(manager)) => {
            if manager.operating_system() != os {
                return Err(AppError::ManagerNotForOs { manager, os });
            }
            Ok(manager)
        }
        (Some(os), None) => Ok(os.default_package_manager()),
        (None, Some(manager)) => Ok(manager),
        (None, None) => Ok(OperatingSystem::Windows.default_package_manager()),
    }
}

//! Operating systems and their package managers.
//!
//! Both enums are closed: the catalog's install mapping is keyed by
//! `PackageManager`, and every manager belongs to exactly one operating
//! system. The first manager of an OS is the default whenever that OS is
//! activated.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::AppError;

/// Operating systems a script can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Windows,
    Macos,
    Linux,
}

impl OperatingSystem {
    /// All operating systems, in display order.
    pub const ALL: [OperatingSystem; 3] =
        [OperatingSystem::Windows, OperatingSystem::Macos, OperatingSystem::Linux];

    /// Package managers available on this operating system, in display order.
    pub fn package_managers(self) -> &'static [PackageManager] {
        match self {
            OperatingSystem::Windows => {
                &[PackageManager::Choco, PackageManager::Winget, PackageManager::Scoop]
            }
            OperatingSystem::Macos => &[PackageManager::Homebrew],
            OperatingSystem::Linux => {
                &[PackageManager::Apt, PackageManager::Dnf, PackageManager::Pacman]
            }
        }
    }

    /// The manager activated by default when this operating system is chosen.
    pub fn default_package_manager(self) -> PackageManager {
        self.package_managers()[0]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OperatingSystem::Windows => "windows",
            OperatingSystem::Macos => "macos",
            OperatingSystem::Linux => "linux",
        }
    }

    /// Parse a lowercase operating system name.
    pub fn parse(name: &str) -> Result<Self, AppError> {
        match name {
            "windows" => Ok(OperatingSystem::Windows),
            "macos" => Ok(OperatingSystem::Macos),
            "linux" => Ok(OperatingSystem::Linux),
            other => Err(AppError::UnknownOperatingSystem(other.to_string())),
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Package managers recognized by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Choco,
    Winget,
    Scoop,
    Homebrew,
    Apt,
    Dnf,
    Pacman,
}

impl PackageManager {
    /// All managers, in the column order of the tool sheet.
    pub const ALL: [PackageManager; 7] = [
        PackageManager::Choco,
        PackageManager::Winget,
        PackageManager::Scoop,
        PackageManager::Apt,
        PackageManager::Dnf,
        PackageManager::Pacman,
        PackageManager::Homebrew,
    ];

    /// The operating system this manager belongs to.
    pub fn operating_system(self) -> OperatingSystem {
        match self {
            PackageManager::Choco | PackageManager::Winget | PackageManager::Scoop => {
                OperatingSystem::Windows
            }
            PackageManager::Homebrew => OperatingSystem::Macos,
            PackageManager::Apt | PackageManager::Dnf | PackageManager::Pacman => {
                OperatingSystem::Linux
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PackageManager::Choco => "choco",
            PackageManager::Winget => "winget",
            PackageManager::Scoop => "scoop",
            PackageManager::Homebrew => "homebrew",
            PackageManager::Apt => "apt",
            PackageManager::Dnf => "dnf",
            PackageManager::Pacman => "pacman",
        }
    }

    /// Parse a lowercase package manager name.
    pub fn parse(name: &str) -> Result<Self, AppError> {
        match name {
            "choco" => Ok(PackageManager::Choco),
            "winget" => Ok(PackageManager::Winget),
            "scoop" => Ok(PackageManager::Scoop),
            "homebrew" => Ok(PackageManager::Homebrew),
            "apt" => Ok(PackageManager::Apt),
            "dnf" => Ok(PackageManager::Dnf),
            "pacman" => Ok(PackageManager::Pacman),
            other => Err(AppError::UnknownPackageManager(other.to_string())),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_manager_belongs_to_its_os_set() {
        for manager in PackageManager::ALL {
            let os = manager.operating_system();
            assert!(os.package_managers().contains(&manager));
        }
    }

    #[test]
    fn os_sets_are_disjoint() {
        let total: usize =
            OperatingSystem::ALL.iter().map(|os| os.package_managers().len()).sum();
        assert_eq!(total, PackageManager::ALL.len());
    }

    #[test]
    fn default_manager_is_first_of_the_os_set() {
        assert_eq!(OperatingSystem::Windows.default_package_manager(), PackageManager::Choco);
        assert_eq!(OperatingSystem::Macos.default_package_manager(), PackageManager::Homebrew);
        assert_eq!(OperatingSystem::Linux.default_package_manager(), PackageManager::Apt);
    }

    #[test]
    fn parse_roundtrips_display() {
        for os in OperatingSystem::ALL {
            assert_eq!(OperatingSystem::parse(os.as_str()).unwrap(), os);
        }
        for manager in PackageManager::ALL {
            assert_eq!(PackageManager::parse(manager.as_str()).unwrap(), manager);
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(matches!(
            OperatingSystem::parse("beos"),
            Err(AppError::UnknownOperatingSystem(_))
        ));
        assert!(matches!(
            PackageManager::parse("snap"),
            Err(AppError::UnknownPackageManager(_))
        ));
    }
}

use std::io;

use thiserror::Error;

use crate::domain::platform::{OperatingSystem, PackageManager};

/// Library-wide error type for devsetup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Operating system name is not recognized.
    #[error("Unknown operating system '{0}': expected windows, macos, or linux")]
    UnknownOperatingSystem(String),

    /// Package manager name is not recognized.
    #[error(
        "Unknown package manager '{0}': expected choco, winget, scoop, homebrew, apt, dnf, or pacman"
    )]
    UnknownPackageManager(String),

    /// Package manager does not belong to the active operating system.
    #[error("Package manager '{manager}' is not available on {os}")]
    ManagerNotForOs { manager: PackageManager, os: OperatingSystem },

    /// Catalog file missing at the given path.
    #[error("Catalog file not found: {0}")]
    CatalogFileNotFound(String),

    /// Catalog document failed to parse or serialize.
    #[error("Invalid catalog document: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Catalog fetch over HTTP failed.
    #[error("Failed to fetch catalog from {url}: {details}")]
    CatalogFetch { url: String, details: String },

    /// Tool not present in the catalog.
    #[error("Tool '{name}' not found. Available: {available}")]
    ToolNotFound { name: String, available: String },

    /// Picks file failed to parse.
    #[error("Invalid picks file: {0}")]
    PicksParse(#[from] serde_yaml::Error),

    /// Picks file names no tools.
    #[error("No tools listed in picks file. Add tool names to the 'tools' list.")]
    EmptyPicks,

    /// Tool sheet missing at the given path.
    #[error("Tool sheet not found: {0}")]
    SheetNotFound(String),

    /// Tool sheet is malformed.
    #[error("Malformed tool sheet: {0}")]
    SheetParse(String),

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

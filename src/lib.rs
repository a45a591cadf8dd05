//! devsetup: compose developer-environment install scripts from a tool catalog.
//!
//! The domain layer is pure: platform enums, the catalog model, the selection
//! state, and the script renderer. Ports define the catalog and clipboard
//! seams; services adapt them to the embedded asset, the filesystem, HTTP, and
//! the system clipboard. The app layer wires the CLI commands.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

pub use app::commands::generate::{GenerateOutcome, GenerateRequest};
pub use domain::{
    AppError, InstallCommands, OperatingSystem, PackageManager, PicksFile, SelectionState, Tool,
    ToolCatalog, ToolCategory, generate_script, render_selection, visible_categories,
};

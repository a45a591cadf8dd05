pub mod catalog;
pub mod error;
pub mod picks;
pub mod platform;
pub mod script;
pub mod selection;

pub use catalog::{InstallCommands, Tool, ToolCatalog, ToolCategory};
pub use error::AppError;
pub use picks::PicksFile;
pub use platform::{OperatingSystem, PackageManager};
pub use script::{generate_script, render_selection, visible_categories};
pub use selection::SelectionState;

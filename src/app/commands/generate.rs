//! Generate command - renders an install script without prompts.

use std::collections::BTreeSet;
use std::path::Path;

use crate::domain::{AppError, PackageManager, PicksFile, generate_script};
use crate::ports::CatalogSource;

/// Resolved inputs for one generate run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub manager: PackageManager,
    pub tools: Vec<String>,
}

impl GenerateRequest {
    /// Build the request from CLI inputs: either a picks file, or the
    /// `--os`/`--pkg`/`--tool` flags.
    pub fn resolve(
        os: Option<&str>,
        pkg: Option<&str>,
        tools: &[String],
        picks: Option<&Path>,
    ) -> Result<Self, AppError> {
        if let Some(path) = picks {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Picks file not found: {}",
                    path.display()
                )));
            }
            let content = std::fs::read_to_string(path)?;
            let picks = PicksFile::from_yaml(&content)?;
            return Ok(Self { manager: picks.package_manager(), tools: picks.tools });
        }

        let manager = super::resolve_manager(os, pkg)?;
        Ok(Self { manager, tools: tools.to_vec() })
    }
}

/// Outcome of a generate run.
#[derive(Debug)]
pub struct GenerateOutcome {
    /// The rendered script, exactly as the renderer produced it.
    pub script: String,
    pub command_count: usize,
    /// Selected names with no entry anywhere in the catalog.
    pub unknown_tools: Vec<String>,
    /// Selected catalog tools with no usable command for the manager.
    pub unavailable_tools: Vec<String>,
}

/// Execute the generate command.
///
/// The script itself never fails on unknown or unavailable selections; those
/// are returned for the caller to surface as warnings.
pub fn execute(
    source: &dyn CatalogSource,
    request: &GenerateRequest,
) -> Result<GenerateOutcome, AppError> {
    let catalog = source.load()?;

    let selected: BTreeSet<String> = request.tools.iter().cloned().collect();
    let script = generate_script(&catalog, &selected, request.manager);
    let command_count = if script.is_empty() { 0 } else { script.lines().count() };

    let mut unknown_tools = Vec::new();
    let mut unavailable_tools = Vec::new();
    for name in &selected {
        match catalog.find_tool(name) {
            None => unknown_tools.push(name.clone()),
            Some((_, tool)) if !tool.is_available_for(request.manager) => {
                unavailable_tools.push(name.clone())
            }
            Some(_) => {}
        }
    }

    Ok(GenerateOutcome { script, command_count, unknown_tools, unavailable_tools })
}

/// Write the script to a file, content pass-through, executable on Unix.
pub fn write_script(path: &Path, script: &str) -> Result<(), AppError> {
    std::fs::write(path, script)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms)?;
    }

    Ok(())
}

//! Convert command - turns a tool sheet into a catalog document.

use std::path::Path;

use crate::domain::AppError;
use crate::services::convert_sheet;

/// Outcome of one conversion.
#[derive(Debug)]
pub struct ConvertOutcome {
    pub categories: usize,
    pub tools: usize,
    pub skipped_rows: usize,
}

/// Execute the convert command: read the sheet, group it into a catalog, and
/// write the JSON document.
pub fn execute(sheet: &Path, output: &Path) -> Result<ConvertOutcome, AppError> {
    if !sheet.exists() {
        return Err(AppError::SheetNotFound(sheet.display().to_string()));
    }
    let content = std::fs::read_to_string(sheet)?;

    let conversion = convert_sheet(&content)?;

    let mut document = serde_json::to_string_pretty(&conversion.catalog)?;
    document.push('\n');
    std::fs::write(output, document)?;

    Ok(ConvertOutcome {
        categories: conversion.catalog.category_count(),
        tools: conversion.catalog.tool_count(),
        skipped_rows: conversion.skipped_rows,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::domain::{PackageManager, ToolCatalog};

    #[test]
    fn fails_if_the_sheet_is_missing() {
        let temp = tempdir().unwrap();

        let result = execute(&temp.path().join("nope.csv"), &temp.path().join("out.json"));

        assert!(matches!(result, Err(AppError::SheetNotFound(_))));
    }

    #[test]
    fn written_document_loads_back_as_a_catalog() {
        let temp = tempdir().unwrap();
        let sheet = temp.path().join("tools.csv");
        let output = temp.path().join("tools.json");
        std::fs::write(
            &sheet,
            "category,name,iconsrc,choco,apt\nDev Tools,git,git.png,choco install git,sudo apt-get install -y git\n",
        )
        .unwrap();

        let outcome = execute(&sheet, &output).unwrap();

        assert_eq!(outcome.categories, 1);
        assert_eq!(outcome.tools, 1);
        assert_eq!(outcome.skipped_rows, 0);

        let catalog: ToolCatalog =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        let (_, git) = catalog.find_tool("git").unwrap();
        assert_eq!(git.install.command_for(PackageManager::Choco), Some("choco install git"));
    }
}

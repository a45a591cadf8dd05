//! Tool sheet converter - turns a tabular CSV sheet into a catalog.
//!
//! Sheet columns: `category`, `name`, `iconsrc`, plus one column per
//! recognized package manager key. Rows are grouped by category in
//! first-appearance order; a row with no category lands in "Uncategorized";
//! only non-empty manager cells are copied, which produces the sparse install
//! mapping the renderer relies on. Rows without a tool name are skipped and
//! counted.

use crate::domain::{AppError, InstallCommands, PackageManager, Tool, ToolCatalog, ToolCategory};

const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Result of one conversion run.
#[derive(Debug)]
pub struct SheetConversion {
    pub catalog: ToolCatalog,
    /// Rows dropped because they carried no tool name.
    pub skipped_rows: usize,
}

/// Convert CSV sheet content into a catalog.
pub fn convert_sheet(content: &str) -> Result<SheetConversion, AppError> {
    let mut rows = parse_csv(content)?.into_iter();

    let header = rows.next().ok_or_else(|| AppError::SheetParse("sheet is empty".to_string()))?;
    let columns = ColumnMap::from_header(&header)?;

    let mut categories: Vec<ToolCategory> = Vec::new();
    let mut skipped_rows = 0;

    for row in rows {
        let name = columns.cell(&row, columns.name).trim();
        if name.is_empty() {
            skipped_rows += 1;
            continue;
        }

        let label = match columns.category.map(|i| columns.cell(&row, i).trim()) {
            Some(label) if !label.is_empty() => label,
            _ => DEFAULT_CATEGORY,
        };

        let mut install = InstallCommands::new();
        for (manager, index) in &columns.managers {
            let cell = columns.cell(&row, *index).trim();
            if !cell.is_empty() {
                install.insert(*manager, cell);
            }
        }

        let iconsrc =
            columns.iconsrc.map(|i| columns.cell(&row, i).trim().to_string()).unwrap_or_default();
        let tool = Tool { name: name.to_string(), iconsrc, install };

        match categories.iter_mut().find(|c| c.category == label) {
            Some(category) => category.tools.push(tool),
            None => {
                categories.push(ToolCategory { category: label.to_string(), tools: vec![tool] })
            }
        }
    }

    Ok(SheetConversion { catalog: ToolCatalog::new(categories), skipped_rows })
}

/// Header-derived column positions.
struct ColumnMap {
    name: usize,
    category: Option<usize>,
    iconsrc: Option<usize>,
    managers: Vec<(PackageManager, usize)>,
}

impl ColumnMap {
    fn from_header(header: &[String]) -> Result<Self, AppError> {
        let mut name = None;
        let mut category = None;
        let mut iconsrc = None;
        let mut managers = Vec::new();

        for (index, cell) in header.iter().enumerate() {
            match cell.trim().to_lowercase().as_str() {
                "name" => name = Some(index),
                "category" => category = Some(index),
                "iconsrc" => iconsrc = Some(index),
                other => {
                    if let Ok(manager) = PackageManager::parse(other) {
                        managers.push((manager, index));
                    }
                    // Unrecognized columns are ignored, as in the original sheet.
                }
            }
        }

        let name = name
            .ok_or_else(|| AppError::SheetParse("header has no 'name' column".to_string()))?;
        Ok(Self { name, category, iconsrc, managers })
    }

    fn cell<'a>(&self, row: &'a [String], index: usize) -> &'a str {
        row.get(index).map(String::as_str).unwrap_or("")
    }
}

/// Minimal CSV reader: comma-separated, double-quote quoting with `""`
/// escapes, tolerant of CRLF line endings. Rows with no content are dropped.
fn parse_csv(content: &str) -> Result<Vec<Vec<String>>, AppError> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(ch),
            }
            continue;
        }
        match ch {
            '"' if field.is_empty() => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                row.push(std::mem::take(&mut field));
                if row.iter().any(|cell| !cell.is_empty()) {
                    rows.push(std::mem::take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(AppError::SheetParse("unterminated quoted field".to_string()));
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        if row.iter().any(|cell| !cell.is_empty()) {
            rows.push(row);
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "\
category,name,iconsrc,choco,winget,scoop,apt,dnf,pacman,homebrew
Dev Tools,node,node.png,choco install node,,,,,,brew install node
Dev Tools,git,git.png,choco install git,,,sudo apt-get install -y git,,,
Editors,vim,vim.png,,,,sudo apt-get install -y vim,,,
,mystery,,choco install mystery,,,,,,
";

    #[test]
    fn groups_rows_by_category_in_first_appearance_order() {
        let conversion = convert_sheet(SHEET).unwrap();
        let categories: Vec<&str> =
            conversion.catalog.categories().iter().map(|c| c.category.as_str()).collect();

        assert_eq!(categories, ["Dev Tools", "Editors", "Uncategorized"]);
        assert_eq!(conversion.catalog.categories()[0].tools.len(), 2);
    }

    #[test]
    fn copies_only_non_empty_manager_cells() {
        let conversion = convert_sheet(SHEET).unwrap();
        let (_, node) = conversion.catalog.find_tool("node").unwrap();

        assert_eq!(node.install.command_for(PackageManager::Choco), Some("choco install node"));
        assert_eq!(node.install.command_for(PackageManager::Homebrew), Some("brew install node"));
        assert_eq!(node.install.command_for(PackageManager::Apt), None);
        assert_eq!(node.install.entries().count(), 2);
    }

    #[test]
    fn missing_category_defaults_to_uncategorized() {
        let conversion = convert_sheet(SHEET).unwrap();
        let (category, _) = conversion.catalog.find_tool("mystery").unwrap();

        assert_eq!(category.category, "Uncategorized");
    }

    #[test]
    fn rows_without_a_name_are_skipped_and_counted() {
        let sheet = "category,name,choco\nDev Tools,git,choco install git\nDev Tools,,choco install ghost\n";

        let conversion = convert_sheet(sheet).unwrap();

        assert_eq!(conversion.catalog.tool_count(), 1);
        assert_eq!(conversion.skipped_rows, 1);
    }

    #[test]
    fn quoted_cells_may_contain_commas_and_quotes() {
        let sheet = "category,name,choco\nDev Tools,node,\"choco install node --params \"\"a,b\"\"\"\n";

        let conversion = convert_sheet(sheet).unwrap();
        let (_, node) = conversion.catalog.find_tool("node").unwrap();

        assert_eq!(
            node.install.command_for(PackageManager::Choco),
            Some("choco install node --params \"a,b\"")
        );
    }

    #[test]
    fn header_without_name_column_is_rejected() {
        let result = convert_sheet("category,choco\nDev Tools,choco install git\n");

        assert!(matches!(result, Err(AppError::SheetParse(_))));
    }

    #[test]
    fn empty_sheet_is_rejected() {
        assert!(matches!(convert_sheet(""), Err(AppError::SheetParse(_))));
    }

    #[test]
    fn unrecognized_columns_are_ignored() {
        let sheet = "category,name,notes,choco\nDev Tools,git,ships everywhere,choco install git\n";

        let conversion = convert_sheet(sheet).unwrap();
        let (_, git) = conversion.catalog.find_tool("git").unwrap();

        assert_eq!(git.install.entries().count(), 1);
    }
}

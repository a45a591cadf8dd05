//! Catalog file service - loads a catalog from a JSON document on disk.

use std::path::PathBuf;

use crate::domain::{AppError, ToolCatalog};
use crate::ports::CatalogSource;

/// Catalog read from a user-supplied JSON file.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for CatalogFile {
    fn load(&self) -> Result<ToolCatalog, AppError> {
        if !self.path.exists() {
            return Err(AppError::CatalogFileNotFound(self.path.display().to_string()));
        }
        let content = std::fs::read_to_string(&self.path)?;
        let catalog: ToolCatalog = serde_json::from_str(&content)?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::tempdir;

    use super::*;
    use crate::domain::PackageManager;

    #[test]
    fn missing_file_is_reported_by_path() {
        let temp = tempdir().unwrap();

        let result = CatalogFile::new(temp.path().join("nope.json")).load();

        assert!(matches!(result, Err(AppError::CatalogFileNotFound(_))));
    }

    #[test]
    fn loads_a_valid_document() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tools.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"[{{"category":"Dev Tools","tools":[{{"name":"git","install":{{"apt":"sudo apt-get install -y git"}}}}]}}]"#
        )
        .unwrap();

        let catalog = CatalogFile::new(&path).load().unwrap();

        let (_, git) = catalog.find_tool("git").unwrap();
        assert_eq!(git.install.command_for(PackageManager::Apt), Some("sudo apt-get install -y git"));
    }

    #[test]
    fn malformed_document_is_all_or_nothing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tools.json");
        std::fs::write(&path, r#"[{"category":"Dev Tools","tools":[{"name":123}]}]"#).unwrap();

        let result = CatalogFile::new(&path).load();

        assert!(matches!(result, Err(AppError::CatalogParse(_))));
    }
}

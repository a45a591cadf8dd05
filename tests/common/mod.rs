//! Shared testing utilities for devsetup CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `devsetup` binary within the
    /// work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("devsetup").expect("Failed to locate devsetup binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write a fixture file into the work directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test fixture");
        path
    }
}

/// Two-tool catalog matching the served `tools.json` shape: node is
/// choco-only, git has choco and apt commands.
#[allow(dead_code)]
pub const DEV_TOOLS_CATALOG: &str = r#"[
  {
    "category": "Dev Tools",
    "tools": [
      { "name": "node", "iconsrc": "node.png", "install": { "choco": "choco install node" } },
      { "name": "git", "iconsrc": "git.png", "install": { "choco": "choco install git", "apt": "sudo apt-get install -y git" } }
    ]
  }
]"#;

mod common;

use common::{DEV_TOOLS_CATALOG, TestContext};
use predicates::prelude::*;

#[test]
fn lists_tools_grouped_by_category() {
    let ctx = TestContext::new();
    let catalog = ctx.write_file("tools.json", DEV_TOOLS_CATALOG);

    ctx.cli()
        .arg("list")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Available tools (choco):"))
        .stdout(predicate::str::contains("Dev Tools"))
        .stdout(predicate::str::contains("• node"))
        .stdout(predicate::str::contains("• git"));
}

#[test]
fn marks_tools_unavailable_for_the_active_manager() {
    let ctx = TestContext::new();
    let catalog = ctx.write_file("tools.json", DEV_TOOLS_CATALOG);

    ctx.cli()
        .arg("list")
        .arg("--catalog")
        .arg(&catalog)
        .args(["--os", "linux"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available tools (apt):"))
        .stdout(predicate::str::contains("• node  (unavailable)"))
        .stdout(predicate::str::contains("• git\n"));
}

#[test]
fn search_filters_tools_case_insensitively() {
    let ctx = TestContext::new();
    let catalog = ctx.write_file("tools.json", DEV_TOOLS_CATALOG);

    ctx.cli()
        .arg("list")
        .arg("--catalog")
        .arg(&catalog)
        .args(["--search", "NO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("node"))
        .stdout(predicate::str::contains("git").not());
}

#[test]
fn search_with_no_match_says_so() {
    let ctx = TestContext::new();
    let catalog = ctx.write_file("tools.json", DEV_TOOLS_CATALOG);

    ctx.cli()
        .arg("list")
        .arg("--catalog")
        .arg(&catalog)
        .args(["--search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tools match 'zzz'"));
}

#[test]
fn detail_shows_every_recorded_command() {
    let ctx = TestContext::new();
    let catalog = ctx.write_file("tools.json", DEV_TOOLS_CATALOG);

    ctx.cli()
        .arg("list")
        .arg("--catalog")
        .arg(&catalog)
        .args(["--detail", "git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("git (Dev Tools)"))
        .stdout(predicate::str::contains("choco install git"))
        .stdout(predicate::str::contains("sudo apt-get install -y git"));
}

#[test]
fn detail_rejects_an_unknown_tool() {
    let ctx = TestContext::new();
    let catalog = ctx.write_file("tools.json", DEV_TOOLS_CATALOG);

    ctx.cli()
        .arg("list")
        .arg("--catalog")
        .arg(&catalog)
        .args(["--detail", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn embedded_catalog_lists_shipped_tools() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["list", "--os", "macos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available tools (homebrew):"))
        .stdout(predicate::str::contains("Languages & Runtimes"))
        .stdout(predicate::str::contains("• git"));
}

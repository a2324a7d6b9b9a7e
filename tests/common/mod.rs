#![allow(dead_code)]

#[path = "../../src/test_utils/repo_fixture.rs"]
mod repo_fixture;

pub use repo_fixture::RepoFixture;

use assert_cmd::Command;
use std::path::Path;

/// The binary with a clean environment pointed at `repo`
pub fn create_branch(repo: &Path) -> Command {
    let mut cmd = Command::cargo_bin("create-branch").expect("binary should build");
    cmd.env_remove("FEATURE_BRANCH_PREFIX")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .arg("-C")
        .arg(repo);
    cmd
}

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Throwaway directory for branch-creation tests, removed on drop.
///
/// Repositories start on `main` with a local identity so commits work on any
/// machine regardless of global git config.
pub struct RepoFixture {
    dir: TempDir,
}

impl RepoFixture {
    /// A plain directory with no repository above it
    pub fn outside() -> Result<Self> {
        let dir = TempDir::new().context("Failed to create temp dir")?;
        Ok(Self { dir })
    }

    /// A repository whose `main` branch has no commits yet
    pub fn empty() -> Result<Self> {
        let fixture = Self::outside()?;
        fixture.git(&["init", "--quiet"])?;
        fixture.git(&["symbolic-ref", "HEAD", "refs/heads/main"])?;
        fixture.git(&["config", "user.email", "dev@example.com"])?;
        fixture.git(&["config", "user.name", "Branch Tester"])?;
        fixture.git(&["config", "commit.gpgsign", "false"])?;
        Ok(fixture)
    }

    /// A repository with a committed README on `main`
    pub fn with_commit() -> Result<Self> {
        let fixture = Self::empty()?;
        fixture.write_file("README.md", "# Sample\n")?;
        fixture.git(&["add", "README.md"])?;
        fixture.git(&["commit", "--quiet", "-m", "Initial commit"])?;
        Ok(fixture)
    }

    /// Add a local branch at HEAD without switching to it
    pub fn with_branch(self, name: &str) -> Result<Self> {
        self.git(&["branch", name])
            .with_context(|| format!("Failed to create branch {name}"))?;
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Branch HEAD points at, including an unborn one
    pub fn current_branch(&self) -> Result<String> {
        self.git(&["symbolic-ref", "--short", "HEAD"])
    }

    pub fn head_commit(&self) -> Result<String> {
        self.git(&["rev-parse", "HEAD"])
    }

    pub fn local_branches(&self) -> Result<Vec<String>> {
        let output = self.git(&["for-each-ref", "--format=%(refname:short)", "refs/heads"])?;
        Ok(output.lines().map(String::from).collect())
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        fs::write(self.path().join(path), content)
            .with_context(|| format!("Failed to write {path}"))
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        fs::read_to_string(self.path().join(path))
            .with_context(|| format!("Failed to read {path}"))
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .context("Failed to execute git")?;

        if !output.status.success() {
            anyhow::bail!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

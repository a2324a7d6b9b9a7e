use crate::context::git_operations::GitOperations;
use crate::error::BranchError;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Git operations that record created branches instead of touching a repository
#[derive(Default)]
pub struct RecordingGitOperations {
    created: Mutex<Vec<String>>,
    existing: Vec<String>,
    not_a_repository: bool,
}

impl RecordingGitOperations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Branches that already exist and must fail to be created
    pub fn with_existing_branches(mut self, branches: &[&str]) -> Self {
        self.existing = branches.iter().map(|b| b.to_string()).collect();
        self
    }

    /// Behave as if every path lies outside a repository
    pub fn outside_repository(mut self) -> Self {
        self.not_a_repository = true;
        self
    }

    pub fn created_branches(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }
}

impl GitOperations for RecordingGitOperations {
    fn repository_root(&self, start: &Path) -> Result<PathBuf, BranchError> {
        if self.not_a_repository {
            return Err(BranchError::NotARepository(start.to_path_buf()));
        }
        Ok(start.to_path_buf())
    }

    fn create_branch(&self, repo_path: &Path, branch_name: &str) -> Result<(), BranchError> {
        self.repository_root(repo_path)?;

        let mut created = self.created.lock().unwrap();
        if self.existing.iter().any(|b| b == branch_name) || created.iter().any(|b| b == branch_name)
        {
            return Err(BranchError::BranchExists(branch_name.to_string()));
        }
        created.push(branch_name.to_string());
        Ok(())
    }
}

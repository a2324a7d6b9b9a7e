use crate::error::BranchError;
use git2::{ErrorCode, Repository};
use std::path::{Path, PathBuf};
use tracing::debug;

pub trait GitOperations: Send + Sync {
    /// Find the working directory root of the repository containing `start`
    fn repository_root(&self, start: &Path) -> Result<PathBuf, BranchError>;

    /// Create a branch from HEAD and check it out
    fn create_branch(&self, repo_path: &Path, branch_name: &str) -> Result<(), BranchError>;
}

pub struct DefaultGitOperations;

impl DefaultGitOperations {
    fn open(repo_path: &Path) -> Result<Repository, BranchError> {
        Repository::discover(repo_path).map_err(|e| match e.code() {
            ErrorCode::NotFound => BranchError::NotARepository(repo_path.to_path_buf()),
            _ => BranchError::Git(e),
        })
    }
}

impl GitOperations for DefaultGitOperations {
    fn repository_root(&self, start: &Path) -> Result<PathBuf, BranchError> {
        let repo = Self::open(start)?;
        match repo.workdir() {
            Some(workdir) => Ok(workdir.to_path_buf()),
            // Bare repositories have nothing to check out
            None => Err(BranchError::NotARepository(start.to_path_buf())),
        }
    }

    /// # Errors
    ///
    /// Returns an error if:
    /// - The path is not inside a repository
    /// - The branch already exists
    /// - The working directory cannot be updated
    fn create_branch(&self, repo_path: &Path, branch_name: &str) -> Result<(), BranchError> {
        let repo = Self::open(repo_path)?;
        let refname = format!("refs/heads/{branch_name}");

        let head = match repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                if repo.find_reference(&refname).is_ok() {
                    return Err(BranchError::BranchExists(branch_name.to_string()));
                }
                // No commits yet: re-point HEAD at the new, still unborn branch
                debug!(branch = branch_name, "Re-pointing unborn HEAD");
                repo.set_head(&refname)?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let commit = head.peel_to_commit()?;
        debug!(
            from = head.shorthand().unwrap_or("HEAD"),
            commit = %commit.id(),
            branch = branch_name,
            "Creating branch"
        );

        repo.branch(branch_name, &commit, false)
            .map_err(|e| match e.code() {
                ErrorCode::Exists => BranchError::BranchExists(branch_name.to_string()),
                _ => BranchError::Git(e),
            })?;

        repo.set_head(&refname)?;
        repo.checkout_head(None)?;

        Ok(())
    }
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BranchError {
    #[error("Branch description is empty after normalization")]
    EmptyName,
    #[error("Unsupported character '{ch}' at position {position} in branch description")]
    InvalidCharacter { ch: char, position: usize },
    #[error("'{0}' is not a valid git branch name")]
    InvalidBranchName(String),
    #[error("Not inside a git repository: {}", .0.display())]
    NotARepository(PathBuf),
    #[error("Branch '{0}' already exists")]
    BranchExists(String),
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BranchError {
    /// True for errors caused by what the user typed rather than by the repository
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            BranchError::EmptyName
                | BranchError::InvalidCharacter { .. }
                | BranchError::InvalidBranchName(_)
        )
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        if self.is_user_error() { 2 } else { 1 }
    }
}

//! Test utilities for branch creation tests.
//!
//! This module provides fake collaborators and helpers for:
//! - Git operations (RecordingGitOperations)
//! - Interactive terminal I/O (ScriptedTerminal)
//! - Temporary repositories (RepoFixture)

pub mod git_fakes;
pub mod repo_fixture;
pub mod terminal_fakes;

pub use git_fakes::RecordingGitOperations;
pub use repo_fixture::RepoFixture;
pub use terminal_fakes::ScriptedTerminal;

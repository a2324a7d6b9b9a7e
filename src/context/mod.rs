pub mod branch_env;
pub mod git_operations;
pub mod terminal;

use branch_env::BranchEnv;
use git_operations::GitOperations;
use terminal::TerminalOperations;

use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    branch_env: Arc<BranchEnv>,
    git_operations: Arc<dyn GitOperations>,
    terminal_operations: Arc<dyn TerminalOperations>,
}

impl AppContext {
    pub fn builder() -> AppContextBuilder {
        AppContextBuilder::new()
    }

    pub fn branch_env(&self) -> Arc<BranchEnv> {
        Arc::clone(&self.branch_env)
    }

    pub fn git_operations(&self) -> Arc<dyn GitOperations> {
        Arc::clone(&self.git_operations)
    }

    pub fn terminal_operations(&self) -> Arc<dyn TerminalOperations> {
        Arc::clone(&self.terminal_operations)
    }
}

pub struct AppContextBuilder {
    branch_env: Option<Arc<BranchEnv>>,
    git_operations: Option<Arc<dyn GitOperations>>,
    terminal_operations: Option<Arc<dyn TerminalOperations>>,
}

impl AppContextBuilder {
    pub fn new() -> Self {
        Self {
            branch_env: None,
            git_operations: None,
            terminal_operations: None,
        }
    }

    #[allow(dead_code)]
    pub fn with_branch_env(mut self, branch_env: Arc<BranchEnv>) -> Self {
        self.branch_env = Some(branch_env);
        self
    }

    #[allow(dead_code)]
    pub fn with_git_operations(mut self, git_operations: Arc<dyn GitOperations>) -> Self {
        self.git_operations = Some(git_operations);
        self
    }

    #[allow(dead_code)]
    pub fn with_terminal_operations(
        mut self,
        terminal_operations: Arc<dyn TerminalOperations>,
    ) -> Self {
        self.terminal_operations = Some(terminal_operations);
        self
    }

    pub fn build(self) -> AppContext {
        AppContext {
            branch_env: self
                .branch_env
                .unwrap_or_else(|| Arc::new(BranchEnv::new())),
            git_operations: self
                .git_operations
                .unwrap_or_else(|| Arc::new(git_operations::DefaultGitOperations)),
            terminal_operations: self
                .terminal_operations
                .unwrap_or_else(|| Arc::new(terminal::DefaultTerminalOperations)),
        }
    }
}

impl Default for AppContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

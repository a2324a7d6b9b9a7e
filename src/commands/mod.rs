use crate::context::AppContext;
use crate::error::BranchError;
use crate::naming::BranchName;

pub mod create;

pub use create::CreateBranchCommand;

/// What a command run ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Created(BranchName),
    Aborted,
    DryRun(BranchName),
}

pub trait Command {
    fn execute(&self, ctx: &AppContext) -> Result<CommandOutcome, BranchError>;
}

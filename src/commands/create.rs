use super::{Command, CommandOutcome};
use crate::context::AppContext;
use crate::display::{Color, Painter};
use crate::error::BranchError;
use crate::naming::{BranchName, PunctuationPolicy};
use crate::prompt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Asks for a description, confirms, and creates `<prefix>/<kebab-name>`
#[derive(Debug, Clone)]
pub struct CreateBranchCommand {
    /// Description given on the command line; prompted for when `None`
    pub description: Option<String>,
    /// Overrides the prefix from the environment
    pub prefix: Option<String>,
    pub policy: PunctuationPolicy,
    /// Skip the confirmation prompt
    pub assume_yes: bool,
    /// Report the branch name without creating it
    pub dry_run: bool,
    pub repo: PathBuf,
    pub painter: Painter,
}

impl Default for CreateBranchCommand {
    fn default() -> Self {
        Self {
            description: None,
            prefix: None,
            policy: PunctuationPolicy::Strip,
            assume_yes: false,
            dry_run: false,
            repo: PathBuf::from("."),
            painter: Painter::plain(),
        }
    }
}

impl CreateBranchCommand {
    fn resolved_prefix(&self, ctx: &AppContext) -> String {
        match &self.prefix {
            Some(prefix) => prefix.clone(),
            None => ctx.branch_env().prefix().to_string(),
        }
    }

    fn read_description(&self, ctx: &AppContext, prefix: &str) -> Result<String, BranchError> {
        if let Some(description) = &self.description {
            return Ok(description.clone());
        }

        let message = prompt::description_prompt(&self.painter, prefix);
        let answer = ctx.terminal_operations().prompt(&message)?;
        if answer.is_none() {
            debug!("Input closed before a description was entered");
        }
        Ok(answer.unwrap_or_default())
    }

    fn confirmed(&self, ctx: &AppContext, branch: &BranchName) -> Result<bool, BranchError> {
        if self.assume_yes {
            return Ok(true);
        }

        let message = prompt::confirmation_prompt(&self.painter, branch);
        let answer = ctx.terminal_operations().prompt(&message)?;
        Ok(answer.as_deref().is_some_and(prompt::is_affirmative))
    }
}

impl Command for CreateBranchCommand {
    fn execute(&self, ctx: &AppContext) -> Result<CommandOutcome, BranchError> {
        let git = ctx.git_operations();
        let terminal = ctx.terminal_operations();

        // Fail before asking for input that could never be used
        let repo_root = if self.dry_run {
            None
        } else {
            let root = git.repository_root(&self.repo)?;
            debug!(repo = %root.display(), "Resolved repository root");
            Some(root)
        };

        let prefix = self.resolved_prefix(ctx);
        let description = self.read_description(ctx, &prefix)?;
        let branch = BranchName::from_description(&prefix, &description, self.policy)?;
        debug!(%description, branch = %branch, "Normalized branch description");

        let Some(repo_root) = repo_root else {
            terminal.print_line(&format!(
                "Would create {}.",
                self.painter.paint(branch.as_str(), Color::Green)
            ))?;
            return Ok(CommandOutcome::DryRun(branch));
        };

        if !self.confirmed(ctx, &branch)? {
            terminal.print_line(&self.painter.paint("Aborted.", Color::Red))?;
            return Ok(CommandOutcome::Aborted);
        }

        git.create_branch(&repo_root, branch.as_str())?;
        info!(branch = %branch, "Created and checked out branch");

        terminal.print_line(&format!(
            "Created {}.",
            self.painter.paint(branch.suffix(), Color::Green)
        ))?;
        Ok(CommandOutcome::Created(branch))
    }
}

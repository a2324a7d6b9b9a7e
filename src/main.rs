use clap::Parser;
use std::path::PathBuf;

use feature_branch::commands::{Command, CreateBranchCommand};
use feature_branch::context::AppContext;
use feature_branch::context::terminal::DefaultTerminalOperations;
use feature_branch::display::{Color, ColorChoice, Painter};
use feature_branch::logging;
use feature_branch::naming::PunctuationPolicy;

#[derive(Parser)]
#[command(name = "create-branch")]
#[command(author, version, about = "Create a kebab-case feature branch from a description", long_about = None)]
struct Cli {
    /// Branch description; prompted for when omitted
    description: Vec<String>,

    /// Create the branch without asking for confirmation
    #[arg(short, long)]
    yes: bool,

    /// Branch prefix [default: $FEATURE_BRANCH_PREFIX or "feature"]
    #[arg(short, long)]
    prefix: Option<String>,

    /// Reject punctuation in the description instead of dropping it
    #[arg(long)]
    strict: bool,

    /// Print the branch name without creating it
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Repository to create the branch in
    #[arg(short = 'C', long, default_value = ".")]
    repo: PathBuf,

    /// When to color output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_cli_logger(cli.verbose) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    let ctx = AppContext::builder().build();
    let painter = Painter::new(
        ctx.branch_env()
            .color_enabled(cli.color, DefaultTerminalOperations::stdout_is_tty()),
    );

    let description = if cli.description.is_empty() {
        None
    } else {
        Some(cli.description.join(" "))
    };

    let cmd = CreateBranchCommand {
        description,
        prefix: cli.prefix,
        policy: if cli.strict {
            PunctuationPolicy::Reject
        } else {
            PunctuationPolicy::Strip
        },
        assume_yes: cli.yes,
        dry_run: cli.dry_run,
        repo: cli.repo,
        painter,
    };

    if let Err(e) = cmd.execute(&ctx) {
        tracing::debug!(error = ?e, "Branch creation failed");
        eprintln!("{}", painter.paint(&format!("Error: {e}"), Color::Red));
        std::process::exit(e.exit_code());
    }
}

mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{commit::CommitSubcommand, git::GitSubcommand, plan::PlanSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "plankit",
    about = "Agent-workflow utilities — parse plans, run validations, wrap git",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .git/)
    #[arg(long, global = true, env = "PLANKIT_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect plan documents
    Plan {
        #[command(subcommand)]
        subcommand: PlanSubcommand,
    },

    /// Run validation commands and report pass/fail
    Validate {
        /// Take the commands from a plan file's Validation Commands section
        #[arg(long)]
        plan: Option<PathBuf>,

        /// Shell commands to run (ignored when --plan is given)
        commands: Vec<String>,
    },

    /// Detect project mode (codebase or system)
    Mode,

    /// Inspect git state
    Git {
        #[command(subcommand)]
        subcommand: GitSubcommand,
    },

    /// Generate and create conventional commits
    Commit {
        #[command(subcommand)]
        subcommand: CommitSubcommand,
    },

    /// List available agent commands
    Commands {
        /// Command directory (default: <root>/.claude/commands)
        dir: Option<PathBuf>,
    },

    /// Derive a kebab-case feature name from a description
    FeatureName {
        #[arg(required = true)]
        description: Vec<String>,
    },

    /// Print research-agent prompts for planning a feature
    Prompts {
        feature: String,

        /// System area the feature touches
        #[arg(default_value = "system")]
        systems: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Plan { subcommand } => cmd::plan::run(subcommand, cli.json),
        Commands::Validate { plan, commands } => {
            cmd::validate::run(&root, plan.as_deref(), &commands, cli.json)
        }
        Commands::Mode => cmd::mode::run(&root, cli.json),
        Commands::Git { subcommand } => cmd::git::run(&root, subcommand, cli.json),
        Commands::Commit { subcommand } => cmd::commit::run(&root, subcommand, cli.json),
        Commands::Commands { dir } => cmd::commands::run(&root, dir.as_deref(), cli.json),
        Commands::FeatureName { description } => {
            cmd::feature_name::run(&description.join(" "), cli.json)
        }
        Commands::Prompts { feature, systems } => cmd::prompts::run(&feature, &systems, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

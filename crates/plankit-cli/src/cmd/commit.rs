use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use plankit_core::{conventional, git};
use std::path::Path;

#[derive(Subcommand)]
pub enum CommitSubcommand {
    /// Suggest a conventional commit type and scope for the changed files
    Message {
        /// Changed files (default: taken from git status)
        files: Vec<String>,

        /// Commit description; when given, the full message is printed
        #[arg(long)]
        description: Option<String>,
    },
    /// Stage files and create a commit
    Create {
        /// Commit message
        #[arg(required = true)]
        message: Vec<String>,

        /// Files to stage (default: everything)
        #[arg(long = "file")]
        files: Vec<String>,
    },
}

pub fn run(root: &Path, subcmd: CommitSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        CommitSubcommand::Message { files, description } => {
            message(root, files, description.as_deref(), json)
        }
        CommitSubcommand::Create { message, files } => {
            create(root, &message.join(" "), &files, json)
        }
    }
}

fn message(
    root: &Path,
    files: Vec<String>,
    description: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let files = if files.is_empty() {
        git::changed_files(root).context("failed to read changed files from git")?
    } else {
        files
    };

    let commit_type = conventional::detect_type(&files);
    let scope = conventional::detect_scope(&files);
    let full = description.map(|d| conventional::generate_message(commit_type, scope.as_deref(), d));

    if json {
        return print_json(&serde_json::json!({
            "type": commit_type,
            "scope": scope,
            "message": full,
        }));
    }

    println!("Type: {commit_type}");
    println!("Scope: {}", scope.as_deref().unwrap_or("(none)"));
    if let Some(msg) = full {
        println!("Message: {msg}");
    }
    Ok(())
}

fn create(root: &Path, message: &str, files: &[String], json: bool) -> anyhow::Result<()> {
    git::stage_files(root, files).context("failed to stage files")?;
    let hash = git::commit(root, message).context("failed to commit")?;

    if json {
        return print_json(&serde_json::json!({ "hash": hash, "message": message }));
    }

    println!("Committed {hash}");
    Ok(())
}

use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use plankit_core::git;
use std::path::Path;

#[derive(Subcommand)]
pub enum GitSubcommand {
    /// Branch, working-tree status, and recent commits
    State,
    /// Changed files, one per line
    Status,
    /// Diff of uncommitted changes, optionally limited to paths
    Diff { files: Vec<String> },
    /// Last commit hash and message
    Info,
}

pub fn run(root: &Path, subcmd: GitSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        GitSubcommand::State => state(root, json),
        GitSubcommand::Status => status(root, json),
        GitSubcommand::Diff { files } => diff(root, &files, json),
        GitSubcommand::Info => info(root, json),
    }
}

fn state(root: &Path, json: bool) -> anyhow::Result<()> {
    let state = git::git_state(root).context("failed to read git state")?;

    if json {
        return print_json(&state);
    }

    println!("BRANCH: {}", state.branch);
    if state.status.is_empty() {
        println!("STATUS: clean");
    } else {
        println!("STATUS: {}", state.status.join("\n"));
    }
    println!("RECENT_COMMITS:");
    for line in &state.commits {
        println!("  - {line}");
    }
    Ok(())
}

fn status(root: &Path, json: bool) -> anyhow::Result<()> {
    let files = git::changed_files(root).context("failed to read git status")?;

    if json {
        return print_json(&files);
    }

    for f in files {
        println!("{f}");
    }
    Ok(())
}

fn diff(root: &Path, files: &[String], json: bool) -> anyhow::Result<()> {
    let diff = git::diff(root, files).context("failed to read git diff")?;

    if json {
        return print_json(&serde_json::json!({ "diff": diff }));
    }

    println!("{diff}");
    Ok(())
}

fn info(root: &Path, json: bool) -> anyhow::Result<()> {
    let info = git::commit_info(root).context("failed to read last commit")?;

    if json {
        return print_json(&info);
    }

    println!("Hash: {}", info.hash);
    println!("Message: {}", info.message);
    Ok(())
}

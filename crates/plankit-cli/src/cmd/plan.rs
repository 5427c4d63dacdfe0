use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use plankit_core::plan;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum PlanSubcommand {
    /// Parse a plan file and summarize it
    Parse { path: PathBuf },
    /// Check whether a plan file is a series index
    Series { path: PathBuf },
    /// List sub-plan references from a series file
    Subplans { path: PathBuf },
}

pub fn run(subcmd: PlanSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        PlanSubcommand::Parse { path } => parse(&path, json),
        PlanSubcommand::Series { path } => series(&path, json),
        PlanSubcommand::Subplans { path } => subplans(&path, json),
    }
}

fn parse(path: &Path, json: bool) -> anyhow::Result<()> {
    let parsed = plan::parse_plan_file(path)
        .with_context(|| format!("failed to read plan '{}'", path.display()))?;

    if json {
        return print_json(&parsed);
    }

    println!("Feature: {}", parsed.feature);
    println!("Tasks: {}", parsed.tasks.len());
    println!("Validations: {}", parsed.validations.len());
    Ok(())
}

fn series(path: &Path, json: bool) -> anyhow::Result<()> {
    let is_series = plan::is_series_file(path)
        .with_context(|| format!("failed to read plan '{}'", path.display()))?;

    if json {
        return print_json(&serde_json::json!({ "series": is_series }));
    }

    println!("{is_series}");
    Ok(())
}

fn subplans(path: &Path, json: bool) -> anyhow::Result<()> {
    let refs = plan::extract_subplans_file(path)
        .with_context(|| format!("failed to read plan '{}'", path.display()))?;

    if json {
        return print_json(&refs);
    }

    for r in refs {
        println!("{r}");
    }
    Ok(())
}

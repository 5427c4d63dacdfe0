use crate::output::{print_json, print_table};
use anyhow::Context;
use plankit_core::commands::{self, COMMANDS_DIR};
use std::path::Path;

pub fn run(root: &Path, dir: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let dir = dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(COMMANDS_DIR));

    let docs = commands::list_commands(&dir)
        .with_context(|| format!("failed to list commands in '{}'", dir.display()))?;

    if json {
        return print_json(&docs);
    }

    if docs.is_empty() {
        println!("No commands found in '{}'.", dir.display());
        return Ok(());
    }

    let rows: Vec<Vec<String>> = docs
        .into_iter()
        .map(|d| vec![d.name, d.description])
        .collect();
    print_table(&["NAME", "DESCRIPTION"], rows);
    Ok(())
}

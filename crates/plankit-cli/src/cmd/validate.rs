use crate::output::print_json;
use anyhow::Context;
use plankit_core::{plan, validate};
use std::path::Path;

pub fn run(
    root: &Path,
    plan_path: Option<&Path>,
    commands: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let commands: Vec<String> = match plan_path {
        Some(path) => {
            let parsed = plan::parse_plan_file(path)
                .with_context(|| format!("failed to read plan '{}'", path.display()))?;
            parsed.validations
        }
        None => commands.to_vec(),
    };

    let results = validate::validate_all(&commands, root);

    if json {
        print_json(&results)?;
    } else {
        for result in &results {
            let status = if result.passed { "PASS" } else { "FAIL" };
            println!("[{status}] {}", result.command);
        }
    }

    let failed = results.iter().filter(|r| !r.passed).count();
    if failed > 0 {
        anyhow::bail!("{failed} validation command(s) failed");
    }
    Ok(())
}

use crate::output::print_json;
use plankit_core::prompts;

pub fn run(feature: &str, systems: &str, json: bool) -> anyhow::Result<()> {
    let agent_a = prompts::similar_code_prompt(feature, systems);
    let agent_b = prompts::project_patterns_prompt(feature, systems);

    if json {
        return print_json(&serde_json::json!({
            "similar_code": agent_a,
            "project_patterns": agent_b,
        }));
    }

    println!("=== AGENT A ===");
    println!("{agent_a}");
    println!();
    println!("=== AGENT B ===");
    println!("{agent_b}");
    Ok(())
}

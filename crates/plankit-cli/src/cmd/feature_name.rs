use crate::output::print_json;
use plankit_core::naming;

pub fn run(description: &str, json: bool) -> anyhow::Result<()> {
    let name = naming::extract_feature_name(description);

    if json {
        return print_json(&serde_json::json!({ "name": name }));
    }

    println!("{name}");
    Ok(())
}

use crate::output::print_json;
use plankit_core::mode;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let detected = mode::detect_mode(root);

    if json {
        return print_json(&detected);
    }

    println!("{detected}");
    Ok(())
}

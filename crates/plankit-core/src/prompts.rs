//! Prompt templates for the two planning research agents.
//!
//! Agent A hunts for similar implementations; agent B extracts the project's
//! conventions. Both take the feature under planning and the system area it
//! touches.

/// Agent A: find existing code similar to the feature.
pub fn similar_code_prompt(feature: &str, systems: &str) -> String {
    format!(
        "Find similar code for: {feature}\n\
         Systems: {systems}\n\
         \n\
         Tasks:\n\
         1. Grep for relevant patterns\n\
         2. Find integration points\n\
         3. Identify files to modify\n\
         4. List new files needed\n\
         \n\
         Return with file:line references."
    )
}

/// Agent B: extract the project's conventions around the touched area.
pub fn project_patterns_prompt(feature: &str, systems: &str) -> String {
    format!(
        "Extract patterns for: {feature}\n\
         \n\
         Read 2-3 files in {systems} area.\n\
         Extract:\n\
         - Naming conventions\n\
         - Error handling\n\
         - Type patterns\n\
         - Testing approach\n\
         \n\
         Return with code snippets."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_embed_feature_and_systems() {
        let a = similar_code_prompt("user login", "auth");
        assert!(a.contains("Find similar code for: user login"));
        assert!(a.contains("Systems: auth"));
        assert!(a.contains("file:line"));

        let b = project_patterns_prompt("user login", "auth");
        assert!(b.contains("Extract patterns for: user login"));
        assert!(b.contains("auth area"));
    }
}

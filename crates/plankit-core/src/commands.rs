//! Discovery of agent commands from a directory of markdown files.
//!
//! Each `*.md` file under `.claude/commands/` describes one command; the
//! first `description:` frontmatter line (quoted or bare) becomes its
//! summary. Files without one are skipped.

use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const COMMANDS_DIR: &str = ".claude/commands";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDoc {
    pub name: String,
    pub description: String,
}

static DESCRIPTION_RE: OnceLock<Regex> = OnceLock::new();

fn description_re() -> &'static Regex {
    DESCRIPTION_RE.get_or_init(|| Regex::new(r#"(?m)^description:\s*["']?(.+?)["']?\s*$"#).unwrap())
}

/// List command docs in `dir`, sorted by file name. A missing directory is an
/// empty listing, not an error; an unreadable file inside it propagates.
pub fn list_commands(dir: &Path) -> Result<Vec<CommandDoc>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .collect();
    paths.sort();

    let mut commands = Vec::new();
    for path in paths {
        let content = std::fs::read_to_string(&path)?;
        let Some(caps) = description_re().captures(&content) else {
            continue;
        };
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        commands.push(CommandDoc {
            name,
            description: caps[1].trim().to_string(),
        });
    }
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let commands = list_commands(&dir.path().join("no-such")).unwrap();
        assert!(commands.is_empty());
    }

    #[test]
    fn lists_described_commands_sorted() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("zz-review.md"),
            "---\ndescription: Review the current diff\n---\nbody\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("aa-plan.md"),
            "---\ndescription: \"Draft an implementation plan\"\n---\nbody\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("no-desc.md"), "# nothing here\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "description: not markdown\n").unwrap();

        let commands = list_commands(dir.path()).unwrap();
        assert_eq!(
            commands,
            [
                CommandDoc {
                    name: "aa-plan".to_string(),
                    description: "Draft an implementation plan".to_string(),
                },
                CommandDoc {
                    name: "zz-review".to_string(),
                    description: "Review the current diff".to_string(),
                },
            ]
        );
    }

    #[test]
    fn single_quoted_description_is_unwrapped() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("cmd.md"),
            "description: 'Ship it'\n",
        )
        .unwrap();
        let commands = list_commands(dir.path()).unwrap();
        assert_eq!(commands[0].description, "Ship it");
    }
}

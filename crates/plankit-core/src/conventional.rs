//! Conventional-commit message generation: detect a commit type and scope
//! from the changed file list, then format `type(scope): description`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Test,
    Refactor,
    Chore,
}

impl CommitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Test => "test",
            CommitType::Refactor => "refactor",
            CommitType::Chore => "chore",
        }
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guess the commit type from the changed file paths. Checks are in priority
/// order over the space-joined, lowercased list: the first keyword family
/// that appears wins.
pub fn detect_type(files: &[String]) -> CommitType {
    let haystack = files.join(" ").to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| haystack.contains(n));

    if has(&["test", "spec"]) {
        CommitType::Test
    } else if has(&["doc", "readme", ".md"]) {
        CommitType::Docs
    } else if has(&["refactor", "restructure"]) {
        CommitType::Refactor
    } else if has(&["fix"]) {
        CommitType::Fix
    } else if has(&["feat", "add"]) {
        CommitType::Feat
    } else {
        CommitType::Chore
    }
}

/// Scope from the first path component of each file, deduplicated and sorted
/// for stable output, comma-joined. `None` when there are no files.
pub fn detect_scope(files: &[String]) -> Option<String> {
    let scopes: BTreeSet<String> = files
        .iter()
        .filter_map(|f| {
            Path::new(f)
                .components()
                .next()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
        })
        .collect();

    if scopes.is_empty() {
        None
    } else {
        Some(scopes.into_iter().collect::<Vec<_>>().join(","))
    }
}

/// `type(scope): description`, or `type: description` without a scope.
pub fn generate_message(commit_type: CommitType, scope: Option<&str>, description: &str) -> String {
    match scope {
        Some(s) => format!("{commit_type}({s}): {description}"),
        None => format!("{commit_type}: {description}"),
    }
}

//! Plan-document parsing.
//!
//! Plan files are loosely-structured markdown: a `## Feature Name` heading
//! followed somewhere by a bold span, `- [ ]` / `- [x]` checklist items, and
//! a `## Validation Commands` section of `- ` command lines. A plan may also
//! be a series index over sub-plans, marked with an HTML comment sentinel.
//!
//! Extraction is best-effort over untrusted text: a missing construct yields
//! an empty field or the `"unknown"` sentinel, never an error. Only the file
//! read itself can fail.

use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Sentinel marking a plan file as an index over sub-plans.
pub const SERIES_MARKER: &str = "<!-- PLAN-SERIES -->";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEntry {
    pub description: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPlan {
    pub feature: String,
    pub tasks: Vec<TaskEntry>,
    pub validations: Vec<String>,
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

static FEATURE_RE: OnceLock<Regex> = OnceLock::new();
static TASK_RE: OnceLock<Regex> = OnceLock::new();
static VALIDATION_HEADING_RE: OnceLock<Regex> = OnceLock::new();
static SUBPLAN_RE: OnceLock<Regex> = OnceLock::new();

// The bold span may appear anywhere after the heading, unbounded. Adversarial
// documents can steer this toward a later unrelated span; that permissiveness
// is intentional.
fn feature_re() -> &'static Regex {
    FEATURE_RE.get_or_init(|| Regex::new(r"(?is)##\s*Feature Name.*?\*\*([^*]+)\*\*").unwrap())
}

// One character between the brackets. Only a lowercase `x` marks a task done;
// `X` and anything else parse as a not-done task.
fn task_re() -> &'static Regex {
    TASK_RE.get_or_init(|| Regex::new(r"-\s*\[(.)\]\s*(.+)").unwrap())
}

fn validation_heading_re() -> &'static Regex {
    VALIDATION_HEADING_RE.get_or_init(|| Regex::new(r"(?i)##\s*Validation Commands").unwrap())
}

fn subplan_re() -> &'static Regex {
    SUBPLAN_RE.get_or_init(|| Regex::new(r"\[.+?\]\(requests/(.+?)\)").unwrap())
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse plan text into its feature name, checklist tasks, and validation
/// commands. The three extractions are independent: any may come back empty
/// without affecting the others.
pub fn parse_plan(content: &str) -> ParsedPlan {
    let feature = feature_re()
        .captures(content)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let tasks = task_re()
        .captures_iter(content)
        .map(|c| TaskEntry {
            done: &c[1] == "x",
            description: c[2].trim().to_string(),
        })
        .collect();

    ParsedPlan {
        feature,
        tasks,
        validations: extract_validations(content),
    }
}

/// Commands from the `## Validation Commands` section: every line whose
/// stripped form starts with `- `, with that prefix removed. The section runs
/// to the next `##` occurrence or end of document.
fn extract_validations(content: &str) -> Vec<String> {
    let Some(m) = validation_heading_re().find(content) else {
        return Vec::new();
    };
    let end = content[m.end()..]
        .find("##")
        .map(|i| m.end() + i)
        .unwrap_or(content.len());

    content[m.start()..end]
        .lines()
        .filter_map(|line| line.trim().strip_prefix("- "))
        .map(str::to_string)
        .collect()
}

/// True iff the plan-series sentinel appears verbatim anywhere in the text.
pub fn is_series(content: &str) -> bool {
    content.contains(SERIES_MARKER)
}

/// Sub-plan references from markdown links targeting `requests/…`, in
/// document order, duplicates kept. Runs unconditionally; callers interested
/// in series semantics check [`is_series`] first.
pub fn extract_subplans(content: &str) -> Vec<String> {
    subplan_re()
        .captures_iter(content)
        .map(|c| c[1].to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// File wrappers — read errors propagate, nothing is recovered
// ---------------------------------------------------------------------------

pub fn parse_plan_file(path: &Path) -> Result<ParsedPlan> {
    Ok(parse_plan(&std::fs::read_to_string(path)?))
}

pub fn is_series_file(path: &Path) -> Result<bool> {
    Ok(is_series(&std::fs::read_to_string(path)?))
}

pub fn extract_subplans_file(path: &Path) -> Result<Vec<String>> {
    Ok(extract_subplans(&std::fs::read_to_string(path)?))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

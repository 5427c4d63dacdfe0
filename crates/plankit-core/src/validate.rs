//! Validation-command execution.
//!
//! Validation commands come out of a plan's `## Validation Commands` section
//! and are run through `sh -c` with captured output. A command that fails to
//! spawn is reported as a failed result rather than an error; the caller gets
//! one result per command, always.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Command;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub command: String,
    pub passed: bool,
    pub output: String,
}

/// Run a single validation command in `cwd`. Blocks until the command exits;
/// no timeout, no retry.
pub fn run_validation(command: &str, cwd: &Path) -> ValidationResult {
    let output = match Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(cwd)
        .output()
    {
        Ok(o) => o,
        Err(e) => {
            return ValidationResult {
                command: command.to_string(),
                passed: false,
                output: format!("failed to spawn: {e}"),
            }
        }
    };

    let passed = output.status.success();
    // Stdout on success, stderr on failure — the failing stream is the one
    // worth showing.
    let captured = if passed {
        String::from_utf8_lossy(&output.stdout).into_owned()
    } else {
        String::from_utf8_lossy(&output.stderr).into_owned()
    };

    ValidationResult {
        command: command.to_string(),
        passed,
        output: captured,
    }
}

/// Run every command in order. Never short-circuits: a failure still lets the
/// remaining commands run.
pub fn validate_all(commands: &[String], cwd: &Path) -> Vec<ValidationResult> {
    commands.iter().map(|c| run_validation(c, cwd)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn passing_command_captures_stdout() {
        let dir = TempDir::new().unwrap();
        let result = run_validation("echo hello", dir.path());
        assert!(result.passed);
        assert_eq!(result.output.trim(), "hello");
    }

    #[test]
    fn failing_command_captures_stderr() {
        let dir = TempDir::new().unwrap();
        let result = run_validation("echo oops >&2; exit 1", dir.path());
        assert!(!result.passed);
        assert_eq!(result.output.trim(), "oops");
    }

    #[test]
    fn runs_in_the_given_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "here").unwrap();
        let result = run_validation("cat marker.txt", dir.path());
        assert!(result.passed);
        assert_eq!(result.output, "here");
    }

    #[test]
    fn validate_all_preserves_order_and_does_not_stop() {
        let dir = TempDir::new().unwrap();
        let commands = vec!["true".to_string(), "false".to_string(), "true".to_string()];
        let results = validate_all(&commands, dir.path());
        assert_eq!(results.len(), 3);
        assert!(results[0].passed);
        assert!(!results[1].passed);
        assert!(results[2].passed);
    }
}

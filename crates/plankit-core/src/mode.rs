//! Project-mode detection: does the root look like a working codebase or a
//! system-level (pre-code) project?

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Directories whose presence (non-empty) marks a project as a codebase.
pub const CODE_DIRS: &[&str] = &[
    "src", "app", "frontend", "backend", "lib", "api", "server", "client",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Codebase,
    System,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Codebase => "codebase",
            Mode::System => "system",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Codebase` iff any known code directory exists under `root` and contains
/// at least one entry. Unreadable directories count as absent, so this never
/// errors.
pub fn detect_mode(root: &Path) -> Mode {
    for dir in CODE_DIRS {
        let path = root.join(dir);
        let non_empty = std::fs::read_dir(&path)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false);
        if non_empty {
            return Mode::Codebase;
        }
    }
    Mode::System
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_root_is_system() {
        let dir = TempDir::new().unwrap();
        assert_eq!(detect_mode(dir.path()), Mode::System);
    }

    #[test]
    fn populated_src_is_codebase() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();
        assert_eq!(detect_mode(dir.path()), Mode::Codebase);
    }

    #[test]
    fn empty_code_dir_stays_system() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("src")).unwrap();
        assert_eq!(detect_mode(dir.path()), Mode::System);
    }

    #[test]
    fn any_code_dir_counts() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("backend")).unwrap();
        std::fs::write(dir.path().join("backend/app.py"), "").unwrap();
        assert_eq!(detect_mode(dir.path()), Mode::Codebase);
    }

    #[test]
    fn mode_display() {
        assert_eq!(Mode::Codebase.to_string(), "codebase");
        assert_eq!(Mode::System.to_string(), "system");
    }
}

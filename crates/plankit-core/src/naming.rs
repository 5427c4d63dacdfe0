//! Feature-name derivation from free-text descriptions.

use regex::Regex;
use std::sync::OnceLock;

const STOP_WORDS: &[&str] = &["a", "an", "the", "for", "to", "in", "with"];

static PUNCT_RE: OnceLock<Regex> = OnceLock::new();
static CAMEL_RE: OnceLock<Regex> = OnceLock::new();
static SPACE_RE: OnceLock<Regex> = OnceLock::new();

fn punct_re() -> &'static Regex {
    PUNCT_RE.get_or_init(|| Regex::new(r"[^\w\s]").unwrap())
}

fn camel_re() -> &'static Regex {
    CAMEL_RE.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap())
}

fn space_re() -> &'static Regex {
    SPACE_RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Convert text to kebab-case: punctuation becomes spaces, camelCase splits
/// at its boundaries, whitespace runs collapse to a single hyphen.
pub fn kebab_case(text: &str) -> String {
    let text = punct_re().replace_all(text, " ");
    let text = camel_re().replace_all(&text, "$1 $2");
    space_re()
        .replace_all(&text.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// Reduce a description to a concise kebab-case name: drop stop words, keep
/// the first three remaining words.
pub fn extract_feature_name(description: &str) -> String {
    let lowered = description.to_lowercase();
    let key_words: Vec<&str> = lowered
        .split_whitespace()
        .filter(|w| !STOP_WORDS.contains(w))
        .take(3)
        .collect();
    kebab_case(&key_words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_handles_punctuation_and_camel_case() {
        assert_eq!(kebab_case("Add UserAuth!"), "add-user-auth");
    }

    #[test]
    fn kebab_collapses_whitespace() {
        assert_eq!(kebab_case("  lots   of  space "), "lots-of-space");
    }

    #[test]
    fn kebab_of_empty_is_empty() {
        assert_eq!(kebab_case(""), "");
        assert_eq!(kebab_case("!!!"), "");
    }

    #[test]
    fn feature_name_drops_stop_words_and_truncates() {
        assert_eq!(
            extract_feature_name("Add a login page for the users"),
            "add-login-page"
        );
    }

    #[test]
    fn feature_name_of_short_description() {
        assert_eq!(extract_feature_name("fix bug"), "fix-bug");
    }
}

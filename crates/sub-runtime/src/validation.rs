use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A problem found in a script's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Check a usage template for unbalanced `[`/`]` and `<`/`>` pairs.
///
/// Only bracket balance is checked; the grammar itself is permissive.
pub fn check_usage(template: &str) -> Vec<&'static str> {
    let mut problems = Vec::new();
    if !balanced(template, '[', ']') {
        problems.push("malformed usage string: unmatched brackets");
    }
    if !balanced(template, '<', '>') {
        problems.push("malformed usage string: unmatched angle brackets");
    }
    problems
}

fn balanced(text: &str, open: char, close: char) -> bool {
    let mut depth: usize = 0;
    for c in text.chars() {
        if c == open {
            depth += 1;
        } else if c == close {
            match depth.checked_sub(1) {
                Some(next) => depth = next,
                None => return false,
            }
        }
    }
    depth == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_usage_passes() {
        assert!(check_usage("{cmd} <name> [-v] [--value=VAL] [--force]! [args]...").is_empty());
        assert!(check_usage("").is_empty());
    }

    #[test]
    fn test_unmatched_angle_bracket() {
        assert_eq!(
            check_usage("{cmd} <name"),
            vec!["malformed usage string: unmatched angle brackets"]
        );
    }

    #[test]
    fn test_unmatched_square_brackets() {
        assert_eq!(
            check_usage("{cmd} [opt"),
            vec!["malformed usage string: unmatched brackets"]
        );
        assert_eq!(
            check_usage("{cmd} opt] [x"),
            vec!["malformed usage string: unmatched brackets"]
        );
    }

    #[test]
    fn test_both_problems_reported() {
        assert_eq!(check_usage("{cmd} [<name").len(), 2);
    }

    #[test]
    fn test_display() {
        let err = ValidationError {
            path: PathBuf::from("/r/libexec/greet"),
            message: "malformed usage string: unmatched brackets".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "/r/libexec/greet: malformed usage string: unmatched brackets"
        );
    }
}

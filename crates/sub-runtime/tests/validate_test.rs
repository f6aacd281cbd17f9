#![cfg(unix)]

mod common;

use common::{GREET, Tree};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use sub_runtime::resolve;

#[test]
fn test_unmatched_angle_bracket_is_flagged() {
    let tree = Tree::new()
        .script("greet", GREET)
        .script("broken", "#!/bin/sh\n# Usage: {cmd} <name\n");
    let config = tree.config();

    let errors = resolve::<&str>(&config, &[]).unwrap().validate().unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, tree.libexec().join("broken"));
    assert_eq!(
        errors[0].message,
        "malformed usage string: unmatched angle brackets"
    );
}

#[test]
fn test_validation_recurses_into_directories() {
    let tree = Tree::new()
        .script("a/b/deep", "#!/bin/sh\n# Usage: {cmd} [opt\n")
        .script("a/fine", "#!/bin/sh\n# Usage: {cmd} [opt]\n")
        .script("top", "#!/bin/sh\n# Usage: {cmd} [x <y\n");
    let config = tree.config();

    let mut errors = resolve::<&str>(&config, &[]).unwrap().validate().unwrap();
    errors.sort_by(|a, b| (&a.path, &a.message).cmp(&(&b.path, &b.message)));

    let found: Vec<(String, &str)> = errors
        .iter()
        .map(|e| {
            let rel = e.path.strip_prefix(tree.libexec()).unwrap();
            (rel.display().to_string(), e.message.as_str())
        })
        .collect();

    assert_eq!(
        found,
        vec![
            ("a/b/deep".to_string(), "malformed usage string: unmatched brackets"),
            ("top".to_string(), "malformed usage string: unmatched angle brackets"),
            ("top".to_string(), "malformed usage string: unmatched brackets"),
        ]
    );
}

#[test]
fn test_clean_tree_has_no_errors() {
    let tree = Tree::new().script("greet", GREET).script("plain", "#!/bin/sh\n");
    let config = tree.config();

    assert!(resolve::<&str>(&config, &[]).unwrap().validate().unwrap().is_empty());
}

#[test]
fn test_unlistable_directory_does_not_stop_validation() {
    let tree = Tree::new()
        .script("locked/inner", GREET)
        .script("broken", "#!/bin/sh\n# Usage: {cmd} <name\n");
    let locked = tree.libexec().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    let listable = fs::read_dir(&locked).is_ok();

    let config = tree.config();
    let errors = resolve::<&str>(&config, &[]).unwrap().validate();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    let errors = errors.unwrap();

    assert!(
        errors.iter().any(|e| e.path == tree.libexec().join("broken")
            && e.message == "malformed usage string: unmatched angle brackets")
    );

    // Privileged users can still list the directory.
    if !listable {
        let locked_errors: Vec<_> = errors.iter().filter(|e| e.path == locked).collect();
        assert_eq!(locked_errors.len(), 1);
        assert!(locked_errors[0].message.starts_with("cannot list directory: "));
    }
}

#[test]
fn test_unlistable_root_is_a_validation_problem() {
    let tree = Tree::new().script("greet", GREET);
    let config = tree.config();
    let node = resolve::<&str>(&config, &[]).unwrap();
    fs::remove_dir_all(tree.libexec()).unwrap();

    let errors = node.validate().unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, tree.libexec());
    assert!(errors[0].message.starts_with("cannot list directory: "));
}

//! Exit codes and error reporting

use crate::common::{run_treestamp, Checkout};
use serial_test::serial;
use tempfile::TempDir;

#[test]
#[serial]
fn test_untagged_repository_fails_with_no_tag() {
    let checkout = Checkout::untagged();
    std::fs::write(checkout.default_output(), "previous").unwrap();

    let output = run_treestamp(checkout.base_dir(), &["--no-config"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No tag found"), "stderr: {}", stderr);
    assert_eq!(
        std::fs::read_to_string(checkout.default_output()).unwrap(),
        "previous"
    );
}

#[test]
#[serial]
fn test_untagged_repository_permissive_embeds_empty_tag() {
    let checkout = Checkout::untagged();

    let output = run_treestamp(checkout.base_dir(), &["--no-config", "--permissive"]);

    assert!(output.status.success());
    let written = std::fs::read_to_string(checkout.default_output()).unwrap();
    assert!(written.contains("TAG = \"\";"));
    assert!(written.contains(&format!("SHA = \"{}\";", checkout.sha)));
}

#[test]
fn test_missing_repository_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_treestamp(temp_dir.path(), &["--no-config"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"), "stderr: {}", stderr);
    assert!(!temp_dir.path().join("TreeSitter.java").exists());
}

#[test]
fn test_usage_errors_exit_with_two() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_treestamp(temp_dir.path(), &["--backend", "svn"]);
    assert_eq!(output.status.code(), Some(2));

    let output = run_treestamp(temp_dir.path(), &["--no-config", "-t", "missing.tera"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
#[serial]
fn test_unwritable_output_fails() {
    let checkout = Checkout::tagged("v1.0.0");
    let target = checkout.base_dir().join("no-such-dir").join("TreeSitter.java");
    let target_arg = target.to_string_lossy().to_string();

    let output = run_treestamp(checkout.base_dir(), &["--no-config", "-o", &target_arg]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!target.exists());
}

#[test]
#[serial]
fn test_uninitialised_submodule_does_not_use_parent_repository() {
    let checkout = Checkout::tagged("parent-v9");
    let project = &checkout.repository;
    std::fs::create_dir_all(project.join("tree-sitter")).unwrap();

    for backend in ["git", "gix"] {
        let output = run_treestamp(
            project,
            &["--no-config", "--stdout", "--backend", backend],
        );

        assert_eq!(output.status.code(), Some(1), "backend {}", backend);
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(!stdout.contains("parent-v9"), "backend {}: {}", backend, stdout);
    }
}

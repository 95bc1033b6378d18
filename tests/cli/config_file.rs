//! Configuration file handling through the binary

use crate::common::{run_treestamp, Checkout};
use serial_test::serial;
use tempfile::TempDir;

#[test]
#[serial]
fn test_config_file_sets_output() {
    let checkout = Checkout::tagged("v1.12.0");
    let config_path = checkout.base_dir().join("treestamp.toml");
    std::fs::write(&config_path, "output = \"gen.java\"\n").unwrap();

    let output = run_treestamp(checkout.base_dir(), &["-c", "treestamp.toml"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(checkout.base_dir().join("gen.java").exists());
    assert!(!checkout.default_output().exists());
}

#[test]
#[serial]
fn test_cli_output_overrides_config() {
    let checkout = Checkout::tagged("v1.12.0");
    std::fs::write(
        checkout.base_dir().join("treestamp.toml"),
        "output = \"from-config.java\"\n",
    )
    .unwrap();

    let output = run_treestamp(
        checkout.base_dir(),
        &["-c", "treestamp.toml", "-o", "from-cli.java"],
    );

    assert!(output.status.success());
    assert!(checkout.base_dir().join("from-cli.java").exists());
    assert!(!checkout.base_dir().join("from-config.java").exists());
}

#[test]
#[serial]
fn test_config_permissive_policy() {
    let checkout = Checkout::untagged();
    std::fs::write(checkout.base_dir().join("treestamp.toml"), "permissive = true\n").unwrap();

    let output = run_treestamp(checkout.base_dir(), &["-c", "treestamp.toml"]);

    assert!(output.status.success());
    let written = std::fs::read_to_string(checkout.default_output()).unwrap();
    assert!(written.contains("TAG = \"\";"));
}

#[test]
fn test_invalid_config_exits_with_two() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("bad.toml"), "unknown-key = 1\n").unwrap();

    let output = run_treestamp(temp_dir.path(), &["-c", "bad.toml"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("bad.toml"));
}

#[test]
fn test_missing_config_exits_with_two() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_treestamp(temp_dir.path(), &["-c", "absent.toml"]);
    assert_eq!(output.status.code(), Some(2));
}

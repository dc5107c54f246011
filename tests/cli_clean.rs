//! Integration tests for `mason clean`

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_mason")
}

fn mason(dir: &Path) -> Command {
    let mut cmd = Command::new(bin());
    cmd.current_dir(dir)
        .env_remove("MASON_TEMPLATE_ROOT")
        .env_remove("MASON_OUTPUT_ROOT");
    cmd
}

#[test]
fn clean_removes_generated_project() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("out/demo");
    fs::create_dir_all(project.join("src/main/java/com/example/demo")).unwrap();
    fs::write(project.join("pom.xml"), "<project/>\n").unwrap();

    let output = mason(dir.path())
        .args(["clean", "demo", "--output-root", "out"])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "clean failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(!project.exists());
}

#[test]
fn clean_is_noop_on_missing_project() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("out")).unwrap();

    let output = mason(dir.path())
        .args(["clean", "absent", "--output-root", "out"])
        .output()
        .unwrap();

    assert!(output.status.success());
}

#[test]
fn clean_rejects_path_like_project_name() {
    let dir = tempdir().unwrap();
    let outside = dir.path().join("outside");
    fs::create_dir_all(&outside).unwrap();
    fs::write(outside.join("keep.txt"), "important").unwrap();
    fs::create_dir_all(dir.path().join("out")).unwrap();

    let output = mason(dir.path())
        .args(["clean", "../outside", "--output-root", "out"])
        .output()
        .unwrap();

    assert!(!output.status.success(), "expected path-like name to fail");
    assert!(outside.join("keep.txt").exists());
}

#[test]
fn clean_json_reports_removed_path() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("out/demo")).unwrap();

    let output = mason(dir.path())
        .args(["clean", "demo", "--output-root", "out", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["event"], "complete");
    assert_eq!(value["command"], "clean");
    assert_eq!(value["project"], "demo");
}

// tests/cli_test.rs
use std::path::Path;
use std::process::{Command, Output};

fn run_cavy(dir: &Path, args: &[&str]) -> Output {
    let config = dir.join("cavy.toml");
    if !config.exists() {
        std::fs::write(&config, "").unwrap();
    }

    Command::new(env!("CARGO_BIN_EXE_cavy"))
        .current_dir(dir)
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("CAVY_LOG")
        .output()
        .expect("Failed to execute cavy")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_cavy"))
        .arg("--help")
        .output()
        .expect("Failed to execute cavy");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Compute npm distribution tags"));
}

#[test]
fn test_tag_release_offline() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cavy(
        dir.path(),
        &["tag", "1.2.0", "--package", "pkg", "--published", "1.0.0,1.1.0"],
    );

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout_lines(&output), vec!["latest", "v1~latest", "v1.2~latest"]);
}

#[test]
fn test_tag_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cavy(
        dir.path(),
        &[
            "tag",
            "2.0.0-rc.1",
            "-p",
            "pkg",
            "--published",
            "1.0.0",
            "--pre-release-tag",
            "beta",
            "--json",
        ],
    );

    assert!(output.status.success(), "{:?}", output);
    let tags: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tags, vec!["v2~beta", "v2.0~beta", "v2.0.0~beta"]);
}

#[test]
fn test_tag_dev_build_uses_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("cavy.toml"),
        "[publish]\npre_release_tag = \"canary\"\ndev_postfix = \"nightly\"\n",
    )
    .unwrap();

    let output = run_cavy(
        dir.path(),
        &["tag", "1.0.0-nightly.5", "-p", "pkg", "--published", ""],
    );

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout_lines(&output), vec!["canary"]);
}

#[test]
fn test_tag_duplicate_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cavy(
        dir.path(),
        &["tag", "1.0.0", "-p", "pkg", "--published", "1.0.0"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already published"), "{}", stderr);
}

#[test]
fn test_tag_invalid_version_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cavy(dir.path(), &["tag", "failit", "-p", "pkg", "--published", ""]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid version"), "{}", stderr);
}

#[test]
fn test_plan_prints_commands() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cavy(
        dir.path(),
        &[
            "plan",
            "1.0.1",
            "-p",
            "pkg",
            "--tarball",
            "dist/pkg-1.0.1.tgz",
            "--published",
            "1.0.0,1.1.0",
        ],
    );

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("npm publish dist/pkg-1.0.1.tgz --tag v1.0~latest --access public"));
    assert!(!stdout.contains("dist-tag add"));
}

#[test]
fn test_bad_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cavy.toml"), "[publish\n").unwrap();

    let output = run_cavy(dir.path(), &["tag", "1.0.0", "-p", "pkg", "--published", ""]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error loading config"), "{}", stderr);
}

#[test]
fn test_registry_lookup_is_announced() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("cavy.toml"),
        "[registry]\nnpm = \"cavy-test-npm-that-does-not-exist\"\n",
    )
    .unwrap();

    let output = run_cavy(dir.path(), &["tag", "1.0.0", "-p", "pkg"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Querying cavy-test-npm-that-does-not-exist for published versions of pkg"),
        "{}",
        stderr
    );
    assert!(stderr.contains("Fetching published versions of pkg failed"), "{}", stderr);
}

#[test]
fn test_offline_run_skips_lookup_status() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cavy(dir.path(), &["tag", "1.0.0", "-p", "pkg", "--published", ""]);

    assert!(output.status.success(), "{:?}", output);
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Querying"));
}

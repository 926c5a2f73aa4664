use std::path::Path;

use tempfile::TempDir;

const OLD_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <artifactId>app</artifactId>
  <version>1.0</version>
  <properties>
    <java.version>1.6</java.version>
  </properties>
</project>"#;

const NEW_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <artifactId>app</artifactId>
  <version>2.0</version>
  <properties>
    <java.version>11</java.version>
  </properties>
</project>"#;

fn git(path: &Path, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .unwrap();
    assert!(output.status.success(), "git {args:?} failed");
}

fn init_git_repo(path: &Path) {
    git(path, &["init", "-b", "main"]);
    git(path, &["config", "user.email", "test@test.com"]);
    git(path, &["config", "user.name", "Test"]);
}

fn commit_pom(path: &Path, pom: &str, message: &str) {
    std::fs::write(path.join("pom.xml"), pom).unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", message]);
}

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_dry_run_walk_leaves_the_tree_alone() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();
    init_git_repo(temp_path);
    commit_pom(temp_path, OLD_POM, "old java");
    commit_pom(temp_path, NEW_POM, "new java");

    let result = retromvn_cli::main(&args(&[
        "retromvn",
        temp_path.to_str().unwrap(),
        "--branch",
        "main",
        "--limit",
        "0",
        "--dry-run",
        "--json",
    ]))
    .await;
    assert!(result.is_ok());

    // dry-run never rewrites the descriptor
    let pom = std::fs::read_to_string(temp_path.join("pom.xml")).unwrap();
    assert!(pom.contains("<java.version>1.6</java.version>"));
}

#[tokio::test]
async fn test_walk_upgrades_and_persists_below_minimum_descriptor() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();
    init_git_repo(temp_path);
    commit_pom(temp_path, OLD_POM, "old java");

    // `true` stands in for the build tool so the walk exercises the full
    // install/package path without Maven installed
    let result = retromvn_cli::main(&args(&[
        "retromvn",
        temp_path.to_str().unwrap(),
        "--branch",
        "main",
        "--command-override",
        "true",
    ]))
    .await;
    assert!(result.is_ok());

    let pom = std::fs::read_to_string(temp_path.join("pom.xml")).unwrap();
    assert!(pom.contains("<java.version>1.8</java.version>"));
    assert!(pom.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
}

#[tokio::test]
async fn test_walk_reports_failing_build_without_aborting() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();
    init_git_repo(temp_path);
    commit_pom(temp_path, NEW_POM, "new java");

    let result = retromvn_cli::main(&args(&[
        "retromvn",
        temp_path.to_str().unwrap(),
        "--branch",
        "main",
        "--command-override",
        "false",
    ]))
    .await;
    // a failing build is a reported outcome, not an error
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_walk_skips_commits_without_descriptor() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();
    init_git_repo(temp_path);
    std::fs::write(temp_path.join("README"), "no pom yet").unwrap();
    git(temp_path, &["add", "."]);
    git(temp_path, &["commit", "-m", "no pom"]);
    commit_pom(temp_path, NEW_POM, "add pom");

    let result = retromvn_cli::main(&args(&[
        "retromvn",
        temp_path.to_str().unwrap(),
        "--branch",
        "main",
        "--limit",
        "0",
        "--dry-run",
    ]))
    .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_unknown_branch_fails() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();
    init_git_repo(temp_path);
    commit_pom(temp_path, NEW_POM, "pom");

    let result = retromvn_cli::main(&args(&[
        "retromvn",
        temp_path.to_str().unwrap(),
        "--branch",
        "release",
    ]))
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_inspect_reads_a_descriptor_file() {
    let temp_dir = TempDir::new().unwrap();
    let pom_path = temp_dir.path().join("pom.xml");
    std::fs::write(&pom_path, NEW_POM).unwrap();

    let result = retromvn_cli::main(&args(&[
        "retromvn",
        "inspect",
        pom_path.to_str().unwrap(),
    ]))
    .await;
    assert!(result.is_ok());
}

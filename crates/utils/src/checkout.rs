use std::path::Path;

use anyhow::{Result, bail};
use tokio::process::Command;

/// Force-checkout a commit, discarding working-tree changes (including
/// any descriptor rewrite from the previous iteration).
pub async fn checkout_commit(workdir: &Path, commit_id: &str) -> Result<()> {
    let output = Command::new("git")
        .args(["checkout", "--force", commit_id])
        .current_dir(workdir)
        .output()
        .await?;

    if !output.status.success() {
        bail!(
            "checkout of {} failed: {}",
            commit_id,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::process::Command as StdCommand;

    use tempfile::TempDir;

    fn git(path: &Path, args: &[&str]) -> String {
        let output = StdCommand::new("git")
            .args(args)
            .current_dir(path)
            .output()
            .unwrap();
        assert!(output.status.success(), "git {args:?} failed");
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }

    #[tokio::test]
    async fn test_checkout_restores_old_content_and_discards_changes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path();
        git(path, &["init", "-b", "main"]);
        git(path, &["config", "user.email", "test@test.com"]);
        git(path, &["config", "user.name", "Test"]);

        std::fs::write(path.join("file.txt"), "first").unwrap();
        git(path, &["add", "."]);
        git(path, &["commit", "-m", "first"]);
        let first = git(path, &["rev-parse", "HEAD"]);

        std::fs::write(path.join("file.txt"), "second").unwrap();
        git(path, &["add", "."]);
        git(path, &["commit", "-m", "second"]);

        // dirty the tree, then force-checkout the first commit
        std::fs::write(path.join("file.txt"), "dirty").unwrap();
        checkout_commit(path, &first).await.unwrap();

        let content = std::fs::read_to_string(path.join("file.txt")).unwrap();
        assert_eq!(content, "first");
    }

    #[tokio::test]
    async fn test_checkout_of_unknown_commit_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path();
        git(path, &["init", "-b", "main"]);

        let result = checkout_commit(path, "0000000000000000000000000000000000000000").await;
        assert!(result.is_err());
    }
}

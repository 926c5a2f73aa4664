use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gix::{ThreadSafeRepository, discover};

/// Find the git repository containing `path` and the root of its working
/// tree. Bare repositories are rejected; every caller checks files out.
pub fn find_git_repo(path: &Path) -> Result<(ThreadSafeRepository, PathBuf)> {
    let repo = discover(path)?.into_sync();
    let workdir = repo
        .work_dir()
        .context("repository has no working tree")?
        .to_path_buf();
    Ok((repo, workdir))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::process::Command;

    use tempfile::TempDir;

    fn git(path: &Path, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(path)
            .output()
            .unwrap();
        assert!(output.status.success(), "git {args:?} failed");
    }

    #[test]
    fn test_discovers_repo_root_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        git(temp.path(), &["init", "-b", "main"]);
        let nested = temp.path().join("module/src");
        std::fs::create_dir_all(&nested).unwrap();

        let (_, workdir) = find_git_repo(&nested).unwrap();
        assert_eq!(
            workdir.canonicalize().unwrap(),
            temp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_directory_outside_any_repo_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(find_git_repo(temp.path()).is_err());
    }
}

use anyhow::{Context, Result};
use gix::Repository;

/// Commit ids reachable from `branch`, tip first, in the order the
/// underlying walk yields them.
pub fn branch_commits(repo: &Repository, branch: &str) -> Result<Vec<String>> {
    let mut reference = repo
        .find_reference(branch)
        .with_context(|| format!("branch {branch:?} not found"))?;
    let tip = reference
        .peel_to_id_in_place()
        .with_context(|| format!("branch {branch:?} does not point at a commit"))?;

    let mut commits = Vec::new();
    for info in repo.rev_walk([tip.detach()]).all()? {
        let info = info?;
        commits.push(info.id.to_string());
    }
    Ok(commits)
}

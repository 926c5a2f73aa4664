use std::path::PathBuf;

use anyhow::{Result, bail};
use colored::*;
use retromvn_core::{BuildOptions, BuildReport, BuildRunner};
use retromvn_maven::MavenRunner;
use retromvn_pom::{PomService, normalize_java_version};
use retromvn_utils::{branch_commits, checkout_commit, display_report, find_git_repo};

#[derive(Debug)]
pub struct WalkArgs {
    pub repo: String,
    pub branch: String,
    pub min_java: String,
    pub limit: usize,
    pub timeout: u64,
    pub command_override: Option<String>,
    pub verbose: bool,
    pub shell: bool,
    pub dry_run: bool,
    pub json: bool,
}

/// Walk the branch newest-first, verifying the build of each commit:
/// force checkout, read the descriptor, upgrade a below-minimum Java
/// level in place, then install and package.
pub async fn handle_walk(args: &WalkArgs) -> Result<()> {
    let (repo, workdir) = find_git_repo(&PathBuf::from(&args.repo))?;
    let repo = repo.to_thread_local();

    let min_java = normalize_java_version(&args.min_java);
    let Ok(threshold) = min_java.parse::<f64>() else {
        bail!("--min-java {:?} is not a Java level", args.min_java);
    };

    let commits = branch_commits(&repo, &args.branch)?;
    let limit = if args.limit == 0 {
        commits.len()
    } else {
        args.limit
    };

    let runner = MavenRunner::new();
    let base_options = BuildOptions::new(&workdir)
        .command(
            args.command_override
                .as_deref()
                .map(|c| c.split_whitespace().map(String::from).collect()),
        )
        .verbose(args.verbose)
        .shell(args.shell)
        .timeout_secs(args.timeout);

    let mut reports = Vec::new();
    for commit in commits.iter().take(limit) {
        checkout_commit(&workdir, commit).await?;

        let mut report = BuildReport::new(commit.clone());
        match PomService::from_path(workdir.join("pom.xml")) {
            Ok(mut service) => {
                report.java_version = service.java_version();

                // Upgrade declarations below the minimum; the forced
                // checkout of the next commit discards the rewrite again.
                let below_minimum = report
                    .java_version
                    .as_deref()
                    .and_then(|v| v.parse::<f64>().ok())
                    .is_some_and(|v| v < threshold);
                if below_minimum {
                    service.set_java_version(&min_java, !args.dry_run)?;
                    report.upgraded_to = Some(min_java.clone());
                }

                if !args.dry_run {
                    let options = base_options.clone().java_version(
                        report.upgraded_to.clone().or_else(|| report.java_version.clone()),
                    );

                    report.installed = Some(runner.install(&options).await?);
                    report.packaged = Some(runner.package(&options).await?);

                    if report.packaged == Some(true) {
                        let jar_name = service.jar_name();
                        if !jar_name.is_empty() {
                            report.jar_path = Some(
                                workdir.join("target").join(jar_name).display().to_string(),
                            );
                        }
                    }
                }
            }
            Err(err) => {
                let short = &commit[..10.min(commit.len())];
                eprintln!(
                    "{} {}",
                    format!("[{short}]").bright_blue().bold(),
                    format!("no usable descriptor: {err}").yellow()
                );
            }
        }

        println!("{}", display_report(&report));
        reports.push(report);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

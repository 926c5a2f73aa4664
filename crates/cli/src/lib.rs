use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use crate::commands::{InspectArgs, WalkArgs, handle_inspect, handle_walk};

pub mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "retromvn",
    author,
    version,
    about = "Historical build verification for Maven projects",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the git repository containing the Maven project
    repo: Option<String>,

    /// Branch whose history is walked
    #[arg(short, long, default_value = "master")]
    branch: String,

    /// Minimum Java level; older declarations are upgraded in place
    #[arg(long, default_value = "1.8")]
    min_java: String,

    /// Number of commits to verify, newest first (0 = whole branch)
    #[arg(short, long, default_value_t = 1)]
    limit: usize,

    /// Timeout for one build-tool invocation, in seconds
    #[arg(long, default_value_t = retromvn_core::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Replacement build command (whitespace-split), e.g. "mvn -q verify"
    #[arg(long)]
    command_override: Option<String>,

    /// Stream build output instead of discarding it
    #[arg(short, long, default_value = "false")]
    verbose: bool,

    /// Run the build command through the platform shell
    #[arg(long, default_value = "false")]
    shell: bool,

    /// Inspect and upgrade descriptors without invoking the build tool
    #[arg(long, default_value = "false")]
    dry_run: bool,

    /// Print the collected reports as JSON when the walk finishes
    #[arg(long, default_value = "false")]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Inspect(InspectArgs),
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    if let Some(command) = cli.command {
        match command {
            Commands::Inspect(args) => handle_inspect(&args).await?,
        }
        return Ok(());
    }

    let Some(repo) = cli.repo else {
        bail!("repository path required (see --help)");
    };
    handle_walk(&WalkArgs {
        repo,
        branch: cli.branch,
        min_java: cli.min_java,
        limit: cli.limit,
        timeout: cli.timeout,
        command_override: cli.command_override,
        verbose: cli.verbose,
        shell: cli.shell,
        dry_run: cli.dry_run,
        json: cli.json,
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["retromvn", "/some/repo"]);
        assert_eq!(cli.repo.as_deref(), Some("/some/repo"));
        assert_eq!(cli.branch, "master");
        assert_eq!(cli.min_java, "1.8");
        assert_eq!(cli.limit, 1);
        assert_eq!(cli.timeout, 600);
        assert!(!cli.dry_run);
    }

    #[rstest]
    #[case(&["retromvn", "/r", "--branch", "main"], "main")]
    #[case(&["retromvn", "/r", "-b", "develop"], "develop")]
    fn test_branch_flag(#[case] args: &[&str], #[case] expected: &str) {
        assert_eq!(parse(args).branch, expected);
    }

    #[test]
    fn test_inspect_subcommand_parses() {
        let cli = parse(&["retromvn", "inspect", "/some/pom.xml"]);
        assert!(matches!(cli.command, Some(Commands::Inspect(_))));
    }

    #[tokio::test]
    async fn test_missing_repo_is_an_error() {
        let args = vec!["retromvn".to_string()];
        assert!(main(&args).await.is_err());
    }
}

use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use retromvn_core::{BuildOptions, BuildRunner};
use tokio::process::Command;
use tokio::time::timeout;

/// Known runtime homes, keyed by normalized Java language level.
const JAVA_HOMES: &[(&str, &str)] = &[
    ("1.8", "/usr/lib/jvm/java-8-openjdk-amd64"),
    ("11", "/usr/lib/jvm/java-11-openjdk-amd64"),
    ("17", "/usr/lib/jvm/java-17-openjdk-amd64"),
];

/// Runtime home directory for a Java level, if the level is recognized.
pub fn java_home_for(java_version: &str) -> Option<&'static str> {
    JAVA_HOMES
        .iter()
        .find(|(version, _)| *version == java_version)
        .map(|(_, home)| *home)
}

/// Default argv for a goal, with every slow or environment-sensitive
/// side-check suppressed so historical revisions stand a chance.
fn default_command(goal: &str) -> Vec<String> {
    [
        "mvn",
        "clean",
        goal,
        "-DskipTests",
        "-Dmaven.javadoc.skip=true",
        "-Dcheckstyle.skip=true",
        "-Denforcer.skip=true",
        "-Dfindbugs.skip=true",
        "-Dlicense.skip=true",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Drives `mvn` for one checked-out revision. Exit status and timeouts
/// map to the boolean result; only spawn failures surface as errors.
#[derive(Debug, Default)]
pub struct MavenRunner;

impl MavenRunner {
    pub fn new() -> Self {
        Self
    }

    async fn run(&self, options: &BuildOptions, goal: &str) -> Result<bool> {
        let argv = options
            .command
            .clone()
            .unwrap_or_else(|| default_command(goal));
        if argv.is_empty() {
            bail!("empty build command");
        }

        let mut command = if options.shell {
            let joined = argv.join(" ");
            if cfg!(target_os = "windows") {
                let mut c = Command::new("cmd");
                c.arg("/C").arg(joined);
                c
            } else {
                let mut c = Command::new("sh");
                c.arg("-c").arg(joined);
                c
            }
        } else {
            let mut c = Command::new(&argv[0]);
            c.args(&argv[1..]);
            c
        };

        command.current_dir(&options.working_dir);
        if !options.verbose {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        }
        if let Some(home) = options.java_version.as_deref().and_then(java_home_for) {
            let path = std::env::var("PATH").unwrap_or_default();
            command.env("JAVA_HOME", home);
            command.env("PATH", format!("{home}/bin:{path}"));
        }

        let mut child = command
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to launch build command {:?}", argv[0]))?;

        match timeout(Duration::from_secs(options.timeout_secs), child.wait()).await {
            Ok(status) => Ok(status?.success()),
            Err(_) => {
                child.kill().await.ok();
                Ok(false)
            }
        }
    }
}

#[async_trait]
impl BuildRunner for MavenRunner {
    async fn install(&self, options: &BuildOptions) -> Result<bool> {
        self.run(options, "install").await
    }

    async fn package(&self, options: &BuildOptions) -> Result<bool> {
        self.run(options, "package").await
    }
}

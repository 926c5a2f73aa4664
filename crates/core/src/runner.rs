use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

/// Default time budget for one build-tool invocation, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Options for a single build-tool invocation.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory the build tool runs in (the checked-out project root).
    pub working_dir: PathBuf,
    /// Full replacement argv; `None` uses the runner's default goal argv.
    pub command: Option<Vec<String>>,
    /// Java language level used to select a runtime home. Unrecognized or
    /// absent values run with the inherited environment unchanged.
    pub java_version: Option<String>,
    /// Stream child output instead of discarding it.
    pub verbose: bool,
    /// Run the command through the platform shell.
    pub shell: bool,
    pub timeout_secs: u64,
}

impl BuildOptions {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            command: None,
            java_version: None,
            verbose: false,
            shell: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn java_version(mut self, version: Option<String>) -> Self {
        self.java_version = version;
        self
    }

    pub fn command(mut self, command: Option<Vec<String>>) -> Self {
        self.command = command;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn shell(mut self, shell: bool) -> Self {
        self.shell = shell;
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Drives the external build tool for one checked-out revision.
///
/// A non-zero exit status or a timeout is a `false` result, not an error;
/// only a failure to launch the process at all surfaces as `Err`.
#[async_trait]
pub trait BuildRunner: std::fmt::Debug + Send + Sync {
    async fn install(&self, options: &BuildOptions) -> Result<bool>;
    async fn package(&self, options: &BuildOptions) -> Result<bool>;
}

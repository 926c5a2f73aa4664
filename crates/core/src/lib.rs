pub mod report;
pub mod runner;

// Re-export the shared vocabulary for convenience
pub use report::BuildReport;
pub use runner::{BuildOptions, BuildRunner, DEFAULT_TIMEOUT_SECS};

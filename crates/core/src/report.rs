use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of verifying one commit: detected Java version, whether the
/// level was upgraded, build results and the expected artifact path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    pub commit: String,
    pub java_version: Option<String>,
    pub upgraded_to: Option<String>,
    pub installed: Option<bool>,
    pub packaged: Option<bool>,
    pub jar_path: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl BuildReport {
    pub fn new(commit: impl Into<String>) -> Self {
        Self {
            commit: commit.into(),
            java_version: None,
            upgraded_to: None,
            installed: None,
            packaged: None,
            jar_path: None,
            recorded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_round_trips_as_json() {
        let mut report = BuildReport::new("abc123");
        report.java_version = Some("1.8".to_string());
        report.installed = Some(true);

        let json = serde_json::to_string(&report).unwrap();
        let parsed: BuildReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.commit, "abc123");
        assert_eq!(parsed.java_version.as_deref(), Some("1.8"));
        assert_eq!(parsed.installed, Some(true));
        assert!(parsed.packaged.is_none());
    }
}

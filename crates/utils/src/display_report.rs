use colored::*;
use retromvn_core::BuildReport;

fn stage(label: &str, outcome: Option<bool>) -> String {
    match outcome {
        Some(true) => format!("{}: {}", label, "ok".bright_green()),
        Some(false) => format!("{}: {}", label, "failed".bright_red()),
        None => format!("{}: {}", label, "skipped".bright_black()),
    }
}

/// One-line colored summary of a commit's verification outcome.
pub fn display_report(report: &BuildReport) -> String {
    let short = report.commit.get(..10).unwrap_or(&report.commit);
    let java = report
        .java_version
        .clone()
        .unwrap_or_else(|| "unknown".to_string());

    let mut line = format!(
        "{} {} {} {}",
        format!("[{short}]").bright_blue().bold(),
        format!("java {java}").bright_green(),
        stage("install", report.installed),
        stage("package", report.packaged),
    );
    if let Some(upgraded) = &report.upgraded_to {
        line.push_str(&format!(" {}", format!("(upgraded to {upgraded})").yellow()));
    }
    if let Some(jar_path) = &report.jar_path {
        line.push_str(&format!(" {} {}", "→".bright_cyan(), jar_path.bright_black()));
    }
    line
}

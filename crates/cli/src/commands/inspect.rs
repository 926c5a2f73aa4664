use anyhow::Result;
use clap::Args;
use colored::*;
use retromvn_pom::PomService;

#[derive(Args, Debug)]
#[command(about = "Report a descriptor's Java version and artifact name")]
pub struct InspectArgs {
    /// Descriptor file path, or raw descriptor content
    pub pom: String,
}

pub async fn handle_inspect(args: &InspectArgs) -> Result<()> {
    let service = PomService::load(&args.pom)?;

    let java = service
        .java_version()
        .unwrap_or_else(|| "not declared".to_string());
    println!("{} {}", "Java version:".bright_white().bold(), java.bright_green());

    let jar = service.jar_name();
    if jar.is_empty() {
        println!("{} {}", "Artifact:".bright_white().bold(), "underivable".bright_black());
    } else {
        println!("{} {}", "Artifact:".bright_white().bold(), jar.bright_green());
    }
    Ok(())
}

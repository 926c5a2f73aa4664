use std::process;

use colored::*;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = retromvn_cli::main(&args).await {
        // `:#` keeps the whole context chain on one line
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

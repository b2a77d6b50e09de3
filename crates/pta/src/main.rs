//! Paper Topic Atlas - Entry Point
//!
//! Clusters an already-harvested batch of scientific-text records into
//! topical groups and lays them out in two dimensions for inspection.
//!
//! ```text
//! pta --input research_data.json --pretty > clusters.json
//! ```

use clap::Parser;

/// Command line interface for Paper Topic Atlas
#[derive(Parser, Debug)]
#[command(name = "pta")]
#[command(about = "Paper Topic Atlas - Topical clustering for scientific-text records")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Records JSON file (bare array or {"papers": [...]}); stdin when omitted
    #[arg(short, long)]
    pub input: Option<std::path::PathBuf>,

    /// Write the cluster map here instead of stdout
    #[arg(short, long)]
    pub output: Option<std::path::PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// List registered embedding providers and exit
    #[arg(long)]
    pub list_providers: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list_providers {
        for (name, description) in pta_application::ports::registry::list_embedding_providers() {
            println!("{name}: {description}");
        }
        return Ok(());
    }

    pta::run(
        cli.config.as_deref(),
        cli.input.as_deref(),
        cli.output.as_deref(),
        cli.pretty,
    )
    .await
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use clipgraph_cli::scan_clip_names;
use clipgraph_core::Catalog;

/// Infer the sequencing graph for a folder of animation clips and print it
/// as JSON on stdout.
#[derive(Parser)]
#[command(name = "clipgraph", version, about = "Infer clip sequencing from animation file names")]
struct Cli {
    /// Folder holding the animation files; names are taken without extension.
    #[arg(default_value = "animations")]
    folder: PathBuf,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let names = scan_clip_names(&cli.folder)
        .with_context(|| format!("could not read clips from {}", cli.folder.display()))?;

    let mut catalog = Catalog::from_names(names);
    catalog.link();

    let json = if cli.pretty {
        serde_json::to_string_pretty(catalog.clips())
    } else {
        serde_json::to_string(catalog.clips())
    }
    .context("could not serialize the clip graph")?;
    println!("{json}");
    Ok(())
}

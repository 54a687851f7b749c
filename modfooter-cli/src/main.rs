//! Moderation footer preview
//!
//! Prints the footer a reviewed item would get in the admin UI.
//!
//! Usage:
//!   modfooter --item item.json --registry registry.json [--config footer.toml] [--detailed]

use anyhow::Result;
use clap::Parser;
use modfooter_cli::{build_view, render, PreviewRequest};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "modfooter")]
#[command(about = "Preview the footer of a reviewed content item")]
struct Args {
    /// Path to the content item JSON
    #[arg(short, long)]
    item: PathBuf,

    /// Path to the relation registry JSON (array of descriptors)
    #[arg(short, long)]
    registry: Option<PathBuf>,

    /// Path to footer.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show the related entity name next to its type
    #[arg(short, long)]
    detailed: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let view = build_view(&PreviewRequest {
        item: args.item,
        registry: args.registry,
        config: args.config,
        detailed: args.detailed,
    })?;
    print!("{}", render(&view)?);
    Ok(())
}

//! Cardwall - masonry card layout and category filtering engine
//!
//! This binary exposes the engine for scripting and inspection: compute a
//! scene's masonry layout, apply category filters headlessly, or explore a
//! scene in the interactive terminal demo.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "tui")]
use cardwall::cli::DemoArgs;
use cardwall::cli::{FilterArgs, LayoutArgs};

/// Cardwall - masonry card layout and category filtering engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the masonry layout for a scene and print the placements
    Layout(LayoutArgs),
    /// Apply a category filter to a scene and print the settled layout
    Filter(FilterArgs),
    /// Launch the interactive terminal demo
    #[cfg(feature = "tui")]
    Demo(DemoArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Layout(args) => args.execute(),
        Command::Filter(args) => args.execute(),
        #[cfg(feature = "tui")]
        Command::Demo(args) => args.execute(),
    }
}

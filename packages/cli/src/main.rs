mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{inspect, preview, render, InspectArgs, PreviewArgs, RenderArgs};
use tracing_subscriber::EnvFilter;

/// Canopy CLI - resolve design documents into render trees
#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log evaluation details (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a component to a JSON render tree
    Render(RenderArgs),

    /// Print the effective style of one layer
    Inspect(InspectArgs),

    /// Render every example of a component on every artboard
    Preview(PreviewArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Render(args) => render(args, &cwd),
            Command::Inspect(args) => inspect(args, &cwd),
            Command::Preview(args) => preview(args, &cwd),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

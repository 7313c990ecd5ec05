mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "boxlabel", about = "Inspect single-box YOLO label sets")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every image with its label state
    Status(commands::status::StatusArgs),
    /// Show the label of one image in normalized and pixel form
    Show(commands::show::ShowArgs),
    /// Print or save a default config file
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Status(args) => commands::status::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}

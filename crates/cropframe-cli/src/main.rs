mod commands;
mod settings;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cropframe", about = "Fit, pan and zoom images inside a fixed crop frame")]
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
    /// Show how an image fits the crop frame
    Info(commands::info::InfoArgs),
    /// Crop one image at a given zoom and drag offset
    Crop(commands::crop::CropArgs),
    /// Crop many images at their initial fit
    Batch(commands::batch::BatchArgs),
    /// Print or save the default config as TOML
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
        Commands::Info(args) => commands::info::run(args),
        Commands::Crop(args) => commands::crop::run(args),
        Commands::Batch(args) => commands::batch::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}

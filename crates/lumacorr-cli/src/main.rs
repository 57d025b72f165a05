mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lumacorr", about = "Intensity correction for 8-bit images")]
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
    /// Show image dimensions and channel statistics
    Info(commands::info::InfoArgs),
    /// Apply a logarithmic intensity correction
    Log(commands::log::LogArgs),
    /// Compensate uneven illumination
    FlatField(commands::flat_field::FlatFieldArgs),
    /// Apply KSI local contrast enhancement
    Ksi(commands::ksi::KsiArgs),
    /// Run a correction pipeline from a TOML config
    Run(commands::run::RunArgs),
    /// Print a sample pipeline config
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
        Commands::Log(args) => commands::log::run(args),
        Commands::FlatField(args) => commands::flat_field::run(args),
        Commands::Ksi(args) => commands::ksi::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}

//! Leafturn CLI
//!
//! Validates navigation settings and explains how route changes are classified.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Leafturn.
#[derive(Parser)]
#[command(
    name = "leafturn",
    version,
    about = "Navigation direction tooling for the Leafturn site"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "leafturn.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Validate the configuration
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Show how a route change is classified
    Classify {
        /// Path being left (use "" for an initial page load)
        from: String,
        /// Path being entered
        to: String,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    leafturn::init_tracing(cli.verbose);

    match cli.command {
        Commands::Check { strict } => {
            leafturn::cmd::check::run(&cli.config, strict)?;
        }
        Commands::Classify { from, to } => {
            leafturn::cmd::classify::run(&cli.config, &from, &to)?;
        }
    }

    Ok(())
}

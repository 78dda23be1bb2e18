//! Main entry point for the `stylekit` binary.
//!
//! Validates, prints and scaffolds utility-stylesheet settings files.

mod commands;

use clap::{Parser, Subcommand};
use sk_core::config::DocumentFormat;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "stylekit", version, about = "Validate utility-stylesheet settings files")]
struct Cli {
    /// Log loader activity to stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate a settings file.
    Check {
        /// Settings file (.yaml, .yml, .json or .toml).
        file: PathBuf,

        /// Treat unrecognized keys as errors.
        #[arg(long)]
        deny_warnings: bool,
    },

    /// Print the normalized settings.
    Show {
        file: PathBuf,

        /// Output format: yaml, json or toml.
        #[arg(short, long, default_value = "yaml")]
        output: DocumentFormat,
    },

    /// Write a starter settings file.
    Init {
        /// Directory to write into.
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// File format: yaml, json or toml.
        #[arg(long, default_value = "yaml")]
        format: DocumentFormat,

        /// Overwrite an existing settings file.
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Check {
            file,
            deny_warnings,
        } => commands::check(&file, deny_warnings).await,
        Command::Show { file, output } => commands::show(&file, output).await,
        Command::Init { dir, format, force } => commands::init(dir, format, force).await,
    }
}

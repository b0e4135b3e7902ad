//! Critique CLI - Command line interface for Critique
//!
//! Sends Python source files to a code feedback provider and prints the
//! returned suggestions.

mod commands;

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use critique_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{ConfigArgs, ReviewArgs};

/// Critique: AI-assisted code review for Python source files
#[derive(Parser, Debug)]
#[command(name = "critique")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Provider endpoint URL (overrides config and env)
    #[arg(long, global = true, env = "CRITIQUE_ENDPOINT")]
    endpoint: Option<String>,

    /// Per-request timeout, e.g. "30s" or "2m" (overrides config and env)
    #[arg(long, global = true, env = "CRITIQUE_TIMEOUT", value_parser = humantime::parse_duration)]
    timeout: Option<Duration>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Review source files and print the provider's feedback
    #[command(visible_alias = "r")]
    Review(ReviewArgs),

    /// Check that the configured provider is reachable
    Check,

    /// Show current configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.endpoint.clone(), cli.timeout)?;

    if cli.verbose {
        tracing::info!(
            endpoint = %config.provider.endpoint,
            timeout = ?config.provider.timeout,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("critique {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Review(args)) => {
            let all_clean = args.execute(cli.verbose, &config).await?;
            if !all_clean {
                return Ok(ExitCode::from(1));
            }
        }
        Some(Commands::Check) => {
            commands::check::execute(&config).await?;
        }
        Some(Commands::Config(args)) => {
            args.execute(&config)?;
        }
        None => {
            println!("Critique - AI-assisted code review for Python source files");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(ExitCode::SUCCESS)
}

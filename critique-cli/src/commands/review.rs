//! Review command - read files, submit to the provider, print feedback

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use critique_core::{render, Config, ReviewRunner, Secrets};
use critique_provider::HttpProvider;

/// Output format for review results
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON array of per-file reports
    Json,
}

/// Review source files and print the provider's feedback
#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// Paths of source files to review, processed in order
    paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl ReviewArgs {
    /// Execute the review command
    ///
    /// Returns true when every file was reviewed successfully with no issues.
    /// A failing file never aborts the run; its error lands in the report.
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<bool> {
        if self.paths.is_empty() {
            println!("No input files. Pass one or more paths to review.");
            return Ok(true);
        }

        let secrets =
            Secrets::load().map_err(|e| anyhow::anyhow!("Failed to load secrets: {}", e))?;

        let provider = HttpProvider::from_config(config, &secrets)
            .map_err(|e| anyhow::anyhow!("Failed to create provider client: {}", e))?;

        if verbose {
            tracing::info!(
                endpoint = %provider.endpoint(),
                files = self.paths.len(),
                "Starting review"
            );
        }

        let reports = ReviewRunner::new().run(&provider, &self.paths).await;

        match self.format {
            OutputFormat::Text => print!("{}", render::render_text(&reports)),
            OutputFormat::Json => println!("{}", render::render_json(&reports)?),
        }

        Ok(reports.iter().all(|r| r.is_clean()))
    }
}

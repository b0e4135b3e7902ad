//! Config command - show effective configuration or write starter files

use clap::Args;
use critique_core::{Config, Secrets};

/// Show current configuration
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write a starter secrets file at the default location
    #[arg(long)]
    init: bool,
}

impl ConfigArgs {
    /// Execute the config command
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        if self.init {
            let path = Secrets::create_template()
                .map_err(|e| anyhow::anyhow!("Failed to create secrets template: {}", e))?;
            println!("Created secrets template at {}", path.display());
            println!("Edit it to add your provider API key.");
            return Ok(());
        }

        println!("Critique Configuration");
        println!("======================");
        println!();
        println!("Provider Settings:");
        println!("  endpoint: {}", config.provider.endpoint);
        println!(
            "  timeout: {}",
            humantime::format_duration(config.provider.timeout)
        );
        println!();
        if let Some(path) = Config::default_config_path() {
            println!("Config file: {}", path.display());
            if path.exists() {
                println!("  (exists)");
            } else {
                println!("  (not found - using defaults)");
            }
        }
        if let Some(path) = Secrets::default_secrets_path() {
            println!("Secrets file: {}", path.display());
            if path.exists() {
                println!("  (exists)");
            } else {
                println!("  (not found - run 'critique config --init' to create)");
            }
        }

        Ok(())
    }
}

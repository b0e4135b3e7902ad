//! Check command - verify the provider is reachable

use critique_core::{Config, Secrets};
use critique_provider::HttpProvider;

/// Execute the check command
pub async fn execute(config: &Config) -> anyhow::Result<()> {
    let secrets = Secrets::load().map_err(|e| anyhow::anyhow!("Failed to load secrets: {}", e))?;

    let provider = HttpProvider::from_config(config, &secrets)
        .map_err(|e| anyhow::anyhow!("Failed to create provider client: {}", e))?;

    println!("Checking provider at {} ...", provider.endpoint());

    match provider.test_connection().await {
        Ok(status) => {
            println!("Provider reachable: {}", status);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Provider check failed: {}", e)),
    }
}

//! `attest template` — registry helpers.

use attest_config::AttestConfig;
use attest_registry::{HttpTemplateStore, MemoryTemplateStore, RegistryClient, TemplateStore};

use crate::cli::TemplateAction;

pub async fn handle(action: &TemplateAction, config: &AttestConfig) -> anyhow::Result<()> {
    match action {
        TemplateAction::Lookup { name, seed } => {
            if *seed || !config.registry.is_configured() {
                lookup(name, MemoryTemplateStore::seeded()).await
            } else {
                let store = HttpTemplateStore::new(
                    config.registry.base_url.clone(),
                    config.registry.timeout_secs,
                );
                lookup(name, store).await
            }
        }
    }
}

async fn lookup<S: TemplateStore>(name: &str, store: S) -> anyhow::Result<()> {
    let client = RegistryClient::new(store);
    match client.lookup(name).await {
        Some(template) => println!("{}", serde_json::to_string_pretty(&template)?),
        None => println!("No golden template found for '{name}'."),
    }
    Ok(())
}

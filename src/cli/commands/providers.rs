//! Provider listing command handler.

use anyhow::{Result, bail};

use crate::config::{ConfigManager, ProviderConfig};
use crate::ui::Style;

/// Lists configured providers, or the details of the named one.
pub fn print_providers(name: Option<&str>) -> Result<()> {
    let config = ConfigManager::new().load_or_default();

    if config.providers.is_empty() {
        println!("No providers configured.");
        println!("Add a [providers.<name>] section to ~/.config/skygpt/config.toml");
        return Ok(());
    }

    let default = config.skygpt.provider.as_deref();

    if let Some(name) = name {
        let Some(provider) = config.providers.get(name) else {
            bail!("Provider '{name}' not found");
        };
        print_one(name, provider, default == Some(name));
    } else {
        let mut entries: Vec<_> = config.providers.iter().collect();
        entries.sort_by_key(|(name, _)| name.as_str());
        for (name, provider) in entries {
            print_one(name, provider, default == Some(name.as_str()));
        }
    }

    Ok(())
}

fn print_one(name: &str, provider: &ProviderConfig, is_default: bool) {
    let marker = if is_default { " (default)" } else { "" };
    println!("{}{}", Style::value(name), Style::dim(marker));
    println!("  {} {}", Style::dim("endpoint"), provider.endpoint);

    if provider.requires_api_key() {
        let state = if provider.get_api_key().is_some() {
            "(set)"
        } else {
            "(missing)"
        };
        println!("  {} {state}", Style::dim("api key "));
    }
    if !provider.models.is_empty() {
        println!("  {} {}", Style::dim("models  "), provider.models.join(", "));
    }
}

use anyhow::Result;

use crate::chat::{ChatSession, SessionConfig};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};

pub struct ChatOptions {
    pub provider: Option<String>,
    pub model: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = load_session_config(&options)?;
    let mut session = ChatSession::new(config)?;
    session.run().await
}

fn load_session_config(options: &ChatOptions) -> Result<SessionConfig> {
    let manager = ConfigManager::new();
    let config_file = manager.load_or_default();

    let resolve_options = ResolveOptions {
        provider: options.provider.clone(),
        model: options.model.clone(),
    };
    let resolved = resolve_config(&resolve_options, &config_file)?;

    Ok(SessionConfig {
        provider_name: resolved.provider_name,
        endpoint: resolved.endpoint,
        model: resolved.model,
        api_key: resolved.api_key,
        system_prompt: resolved.system_prompt,
        timeout_secs: resolved.timeout_secs,
    })
}

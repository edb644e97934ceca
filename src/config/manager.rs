use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::completion::DEFAULT_SYSTEM_PROMPT;
use crate::paths;
use crate::ui::Style;

/// Request timeout applied when the config does not set one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

const CONFIG_HINT: &str = "~/.config/skygpt/config.toml";

/// The `[skygpt]` section: session defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkyConfig {
    pub provider: Option<String>,
    pub model: Option<String>,
    /// Replaces the built-in system prompt when set.
    pub system_prompt: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// One `[providers.<name>]` section: where to send requests and how to
/// authenticate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub endpoint: String,
    /// API key stored inline. Prefer `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Name of an environment variable holding the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Models this provider is known to serve. Informational; other model
    /// names are accepted with a warning.
    #[serde(default)]
    pub models: Vec<String>,
}

impl ProviderConfig {
    /// The API key to send, with the environment taking priority over the
    /// inline value.
    pub fn get_api_key(&self) -> Option<String> {
        let from_env = self
            .api_key_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .filter(|key| !key.is_empty());
        from_env.or_else(|| self.api_key.clone())
    }

    /// Whether the config declares a key source for this provider.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }
}

/// Everything `~/.config/skygpt/config.toml` can hold.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub skygpt: SkyConfig,
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

/// CLI overrides; these beat the config file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub provider: Option<String>,
    pub model: Option<String>,
}

/// The effective settings for one invocation, after merging CLI options,
/// the config file, and built-in defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub provider_name: String,
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub system_prompt: String,
    pub timeout_secs: u64,
}

/// Merges CLI options over config file settings over built-in defaults.
///
/// Provider and model are required from one of the first two layers; the
/// system prompt and timeout always have built-in fallbacks.
pub fn resolve_config(options: &ResolveOptions, file: &ConfigFile) -> Result<ResolvedConfig> {
    let provider_name = setting(
        options.provider.as_ref(),
        file.skygpt.provider.as_ref(),
        "provider",
    )?;
    let provider = file
        .providers
        .get(&provider_name)
        .ok_or_else(|| unknown_provider(&provider_name, file))?;
    let model = setting(options.model.as_ref(), file.skygpt.model.as_ref(), "model")?;

    if !provider.models.is_empty() && !provider.models.contains(&model) {
        eprintln!(
            "{} model '{model}' is not listed for '{provider_name}' (listed: {})",
            Style::warning("Warning:"),
            provider.models.join(", ")
        );
    }

    let api_key = provider.get_api_key();
    if api_key.is_none() && provider.requires_api_key() {
        let var = provider.api_key_env.as_deref().unwrap_or("API_KEY");
        bail!(
            "Provider '{provider_name}' needs an API key. \
             Export {var} or set 'api_key' in {CONFIG_HINT}"
        );
    }

    Ok(ResolvedConfig {
        endpoint: provider.endpoint.clone(),
        provider_name,
        model,
        api_key,
        system_prompt: file
            .skygpt
            .system_prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_owned()),
        timeout_secs: file.skygpt.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
    })
}

fn setting(cli: Option<&String>, file: Option<&String>, name: &str) -> Result<String> {
    cli.or(file).cloned().ok_or_else(|| {
        anyhow!(
            "No {name} configured. \
             Pass --{name} <NAME> or set '{name}' under [skygpt] in {CONFIG_HINT}"
        )
    })
}

fn unknown_provider(name: &str, file: &ConfigFile) -> anyhow::Error {
    if file.providers.is_empty() {
        return anyhow!("Provider '{name}' not found. No providers are configured in {CONFIG_HINT}");
    }
    let mut known: Vec<_> = file.providers.keys().map(String::as_str).collect();
    known.sort_unstable();
    anyhow!(
        "Provider '{name}' not found. Configured providers: {}",
        known.join(", ")
    )
}

/// Reads and writes the config file at its XDG location.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::at(paths::config_dir().join("config.toml"))
    }

    const fn at(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let raw = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read {}", self.config_path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Malformed config at {}", self.config_path.display()))
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(dir) = self.config_path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let raw = toml::to_string_pretty(config).context("Failed to serialize config")?;
        fs::write(&self.config_path, raw)
            .with_context(|| format!("Failed to write {}", self.config_path.display()))
    }

    /// An unreadable or absent config file is treated as empty.
    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// A "local" provider (no key, two models) and a "hosted" one that
    /// requires a key from the environment.
    fn two_provider_file() -> ConfigFile {
        ConfigFile {
            skygpt: SkyConfig {
                provider: Some("local".into()),
                model: Some("mini".into()),
                system_prompt: None,
                timeout_secs: None,
            },
            providers: HashMap::from([
                (
                    "local".into(),
                    ProviderConfig {
                        endpoint: "http://localhost:8080".into(),
                        api_key: None,
                        api_key_env: None,
                        models: vec!["mini".into(), "large".into()],
                    },
                ),
                (
                    "hosted".into(),
                    ProviderConfig {
                        endpoint: "https://api.hosted.dev".into(),
                        api_key: None,
                        api_key_env: Some("SKYGPT_UNSET_TEST_KEY".into()),
                        models: vec![],
                    },
                ),
            ]),
        }
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::at(dir.path().join("config.toml"));

        let mut written = two_provider_file();
        written.skygpt.system_prompt = Some("Answer briefly.".into());
        written.skygpt.timeout_secs = Some(15);

        manager.save(&written).unwrap();
        let read = manager.load().unwrap();

        assert_eq!(read.skygpt.provider.as_deref(), Some("local"));
        assert_eq!(read.skygpt.system_prompt.as_deref(), Some("Answer briefly."));
        assert_eq!(read.skygpt.timeout_secs, Some(15));
        assert_eq!(read.providers["local"].models, vec!["mini", "large"]);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::at(dir.path().join("config.toml"));

        assert!(manager.load().is_err());
        assert!(manager.load_or_default().providers.is_empty());
    }

    #[test]
    fn test_cli_overrides_beat_file_defaults() {
        let options = ResolveOptions {
            provider: Some("hosted".into()),
            model: Some("large".into()),
        };
        let mut file = two_provider_file();
        file.providers.get_mut("hosted").unwrap().api_key_env = None;

        let resolved = resolve_config(&options, &file).unwrap();

        assert_eq!(resolved.provider_name, "hosted");
        assert_eq!(resolved.endpoint, "https://api.hosted.dev");
        assert_eq!(resolved.model, "large");
    }

    #[test]
    fn test_file_defaults_apply_without_cli_options() {
        let resolved = resolve_config(&ResolveOptions::default(), &two_provider_file()).unwrap();

        assert_eq!(resolved.provider_name, "local");
        assert_eq!(resolved.model, "mini");
        assert!(resolved.api_key.is_none());
    }

    #[test]
    fn test_builtin_defaults_for_prompt_and_timeout() {
        let resolved = resolve_config(&ResolveOptions::default(), &two_provider_file()).unwrap();

        assert_eq!(resolved.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(resolved.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_file_prompt_and_timeout_beat_builtins() {
        let mut file = two_provider_file();
        file.skygpt.system_prompt = Some("Answer in haiku.".into());
        file.skygpt.timeout_secs = Some(5);

        let resolved = resolve_config(&ResolveOptions::default(), &file).unwrap();

        assert_eq!(resolved.system_prompt, "Answer in haiku.");
        assert_eq!(resolved.timeout_secs, 5);
    }

    #[test]
    fn test_missing_provider_names_the_flag() {
        let err = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap_err();
        assert!(err.to_string().contains("--provider"));
    }

    #[test]
    fn test_missing_model_names_the_flag() {
        let mut file = two_provider_file();
        file.skygpt.model = None;

        let err = resolve_config(&ResolveOptions::default(), &file).unwrap_err();
        assert!(err.to_string().contains("--model"));
    }

    #[test]
    fn test_unknown_provider_lists_configured_ones() {
        let options = ResolveOptions {
            provider: Some("typo".into()),
            model: None,
        };

        let err = resolve_config(&options, &two_provider_file()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("not found"));
        assert!(message.contains("hosted, local"));
    }

    #[test]
    fn test_required_key_missing_is_an_error() {
        let options = ResolveOptions {
            provider: Some("hosted".into()),
            model: Some("any".into()),
        };

        let err = resolve_config(&options, &two_provider_file()).unwrap_err();
        assert!(err.to_string().contains("API key"));
        assert!(err.to_string().contains("SKYGPT_UNSET_TEST_KEY"));
    }

    #[test]
    #[serial_test::serial]
    fn test_api_key_env_beats_inline_key() {
        // SAFETY: serial test, test-only variable
        unsafe { std::env::set_var("SKYGPT_MANAGER_TEST_KEY", "from-env") };

        let provider = ProviderConfig {
            endpoint: "https://api.hosted.dev".into(),
            api_key: Some("from-file".into()),
            api_key_env: Some("SKYGPT_MANAGER_TEST_KEY".into()),
            models: vec![],
        };
        assert_eq!(provider.get_api_key().as_deref(), Some("from-env"));

        unsafe { std::env::remove_var("SKYGPT_MANAGER_TEST_KEY") };
        assert_eq!(provider.get_api_key().as_deref(), Some("from-file"));
    }
}

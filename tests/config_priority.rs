//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file settings.
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use skygpt_cli::completion::DEFAULT_SYSTEM_PROMPT;
use skygpt_cli::config::{
    ConfigFile, ProviderConfig, ResolveOptions, SkyConfig, resolve_config,
};

fn make_config_with_defaults() -> ConfigFile {
    let mut providers = HashMap::new();
    providers.insert(
        "test_provider".to_string(),
        ProviderConfig {
            endpoint: "http://test.local".to_string(),
            api_key: Some("test_key".to_string()),
            api_key_env: None,
            models: vec!["test_model".to_string()],
        },
    );

    ConfigFile {
        skygpt: SkyConfig {
            provider: Some("test_provider".to_string()),
            model: Some("config_model".to_string()),
            system_prompt: None,
            timeout_secs: None,
        },
        providers,
    }
}

#[test]
fn test_cli_model_overrides_config_model() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        provider: None,
        model: Some("cli_model".to_string()),
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.model, "cli_model");
}

#[test]
fn test_cli_provider_overrides_config_provider() {
    let mut config = make_config_with_defaults();
    config.providers.insert(
        "other_provider".to_string(),
        ProviderConfig {
            endpoint: "http://other.local".to_string(),
            api_key: Some("other_key".to_string()),
            api_key_env: None,
            models: vec!["other_model".to_string()],
        },
    );

    let options = ResolveOptions {
        provider: Some("other_provider".to_string()),
        model: None,
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.provider_name, "other_provider");
    assert_eq!(resolved.endpoint, "http://other.local");
}

#[test]
fn test_config_defaults_used_when_cli_not_specified() {
    let config = make_config_with_defaults();
    let options = ResolveOptions::default();

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.provider_name, "test_provider");
    assert_eq!(resolved.model, "config_model");
    assert_eq!(resolved.api_key, Some("test_key".to_string()));
}

#[test]
fn test_builtin_system_prompt_used_when_config_silent() {
    let config = make_config_with_defaults();
    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.system_prompt, DEFAULT_SYSTEM_PROMPT);
}

#[test]
fn test_config_system_prompt_overrides_builtin() {
    let mut config = make_config_with_defaults();
    config.skygpt.system_prompt = Some("You are a pirate.".to_string());

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.system_prompt, "You are a pirate.");
}

#[test]
fn test_config_timeout_overrides_builtin() {
    let mut config = make_config_with_defaults();
    config.skygpt.timeout_secs = Some(5);

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.timeout_secs, 5);
}

#[test]
fn test_all_cli_options_override_config() {
    let mut config = make_config_with_defaults();
    config.providers.insert(
        "cli_provider".to_string(),
        ProviderConfig {
            endpoint: "http://cli.local".to_string(),
            api_key: Some("cli_key".to_string()),
            api_key_env: None,
            models: vec!["cli_model".to_string()],
        },
    );

    let options = ResolveOptions {
        provider: Some("cli_provider".to_string()),
        model: Some("cli_specified_model".to_string()),
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.provider_name, "cli_provider");
    assert_eq!(resolved.model, "cli_specified_model");
}

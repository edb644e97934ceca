//! Configure command: pick the default provider, model, and system prompt.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{ConfigFile, ConfigManager};
use crate::ui::{Style, run_cancellable};

pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new();
    let mut config = manager.load_or_default();

    if show {
        print_defaults(&config);
        return Ok(());
    }
    if config.providers.is_empty() {
        bail!(
            "No providers configured. Add a [providers.<name>] section to \
             ~/.config/skygpt/config.toml first."
        );
    }

    run_cancellable(|| {
        let mut names: Vec<String> = config.providers.keys().cloned().collect();
        names.sort_unstable();
        let cursor = position_of(&names, config.skygpt.provider.as_deref());
        let provider = Select::new("Default provider:", names)
            .with_starting_cursor(cursor)
            .prompt()?;

        let models = config
            .providers
            .get(&provider)
            .map(|p| p.models.clone())
            .unwrap_or_default();
        let model = if models.is_empty() {
            let typed = Text::new("Default model:")
                .with_help_message("This provider lists no models, type a name")
                .prompt()?;
            if typed.trim().is_empty() {
                bail!("Model name cannot be empty");
            }
            typed.trim().to_owned()
        } else {
            let cursor = position_of(&models, config.skygpt.model.as_deref());
            Select::new("Default model:", models)
                .with_starting_cursor(cursor)
                .prompt()?
        };

        let typed = Text::new("System prompt:")
            .with_help_message("Leave empty for the built-in prompt")
            .with_default(config.skygpt.system_prompt.as_deref().unwrap_or(""))
            .prompt()?;
        config.skygpt.system_prompt = match typed.trim() {
            "" => None,
            text => Some(text.to_owned()),
        };

        config.skygpt.provider = Some(provider);
        config.skygpt.model = Some(model);
        manager.save(&config)?;

        println!();
        println!(
            "{} Saved {}",
            Style::success("✓"),
            Style::dim(manager.config_path().display().to_string())
        );
        Ok(())
    })
}

fn print_defaults(config: &ConfigFile) {
    let shown = |value: Option<&str>| value.map_or_else(|| Style::dim("(not set)"), Style::value);

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {} {}",
        Style::dim("provider     "),
        shown(config.skygpt.provider.as_deref())
    );
    println!(
        "  {} {}",
        Style::dim("model        "),
        shown(config.skygpt.model.as_deref())
    );
    println!(
        "  {} {}",
        Style::dim("system_prompt"),
        shown(config.skygpt.system_prompt.as_deref())
    );
    println!();
}

fn position_of(items: &[String], wanted: Option<&str>) -> usize {
    wanted
        .and_then(|w| items.iter().position(|item| item == w))
        .unwrap_or(0)
}

//! Slash command parsing and autocomplete.
//!
//! One table drives everything: parsing (including aliases), the inquire
//! autocompleter, and the `/help` listing.

use inquire::autocompletion::{Autocomplete, Replacement};

/// A recognized slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Clear,
    Help,
    Quit,
    Unknown(String),
}

/// One line of user input.
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

struct CommandSpec {
    name: &'static str,
    aliases: &'static [&'static str],
    help: &'static str,
    command: SlashCommand,
}

const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "config",
        aliases: &[],
        help: "Show the active configuration",
        command: SlashCommand::Config,
    },
    CommandSpec {
        name: "clear",
        aliases: &["new"],
        help: "Drop the transcript and start over",
        command: SlashCommand::Clear,
    },
    CommandSpec {
        name: "help",
        aliases: &[],
        help: "List available commands",
        command: SlashCommand::Help,
    },
    CommandSpec {
        name: "quit",
        aliases: &["exit", "q"],
        help: "Leave chat mode",
        command: SlashCommand::Quit,
    },
];

pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }
    match line.strip_prefix('/') {
        Some(rest) => Input::Command(parse_command(rest)),
        None => Input::Text(line.to_owned()),
    }
}

fn parse_command(rest: &str) -> SlashCommand {
    let word = rest.split_whitespace().next().unwrap_or("");
    COMMANDS
        .iter()
        .find(|spec| spec.name == word || spec.aliases.contains(&word))
        .map_or_else(|| SlashCommand::Unknown(word.to_owned()), |spec| spec.command.clone())
}

/// `(display name, description)` pairs for `/help`, aliases included.
pub fn help_entries() -> impl Iterator<Item = (String, &'static str)> {
    COMMANDS.iter().map(|spec| {
        let mut name = format!("/{}", spec.name);
        if !spec.aliases.is_empty() {
            let aliases: Vec<String> = spec.aliases.iter().map(|a| format!("/{a}")).collect();
            name = format!("{name} ({})", aliases.join(", "));
        }
        (name, spec.help)
    })
}

/// Suggests canonical command names while the input starts with `/`.
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        let Some(partial) = input.strip_prefix('/') else {
            return Ok(Vec::new());
        };
        Ok(COMMANDS
            .iter()
            .filter(|spec| spec.name.starts_with(partial))
            .map(|spec| format!("/{}  {}", spec.name, spec.help))
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        Ok(highlighted_suggestion
            .as_deref()
            .and_then(|s| s.split_whitespace().next())
            .map(str::to_owned))
    }
}

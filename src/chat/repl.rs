use anyhow::Result;
use futures_util::StreamExt;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::io::{self, Write};
use std::time::Duration;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::completion::{CompletionClient, CompletionError, CompletionRequest};
use crate::session::{Generation, SessionController};
use crate::ui::Spinner;
use crate::ui::Style;

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The provider name.
    pub provider_name: String,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use.
    pub model: String,
    /// The API key (if required).
    pub api_key: Option<String>,
    /// System prompt sent ahead of the transcript.
    pub system_prompt: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// An interactive chat session.
///
/// Provides a REPL-style interface: free text becomes a turn, slash commands
/// control the session. The transcript carries across turns until `/clear`.
pub struct ChatSession {
    config: SessionConfig,
    client: CompletionClient,
    controller: SessionController,
}

impl ChatSession {
    /// Creates a new chat session with the given configuration.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let client = CompletionClient::new(
            config.endpoint.clone(),
            config.api_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;
        Ok(Self {
            config,
            client,
            controller: SessionController::new(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type a message, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(&cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.take_turn(&text).await?;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn handle_command(&mut self, cmd: &SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config, self.controller.transcript().len());
                true
            }
            SlashCommand::Clear => {
                // Teardown: any late fragments from an in-flight request are
                // dropped by the controller's generation check.
                self.controller.reset();
                println!("{} Conversation cleared\n", Style::success("✓"));
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    /// Runs one turn: submit the text, stream the reply into the transcript.
    async fn take_turn(&mut self, text: &str) -> Result<()> {
        self.controller.update_draft(text);
        let Some(turn) = self.controller.submit() else {
            // Busy or blank draft; the prompt loop makes this unreachable,
            // but the controller defends against it anyway.
            return Ok(());
        };

        let request = CompletionRequest {
            model: self.config.model.clone(),
            system_prompt: Some(self.config.system_prompt.clone()),
            context: turn.context,
        };

        let spinner = Spinner::new("Thinking...");

        let mut stream = match self.client.complete_stream(&request).await {
            Ok(stream) => stream,
            Err(e) => {
                spinner.stop();
                self.fail_turn(turn.generation, &e);
                return Ok(());
            }
        };

        let mut first_fragment = true;

        while let Some(item) = stream.next().await {
            match item {
                Ok(fragment) => {
                    if first_fragment {
                        spinner.stop();
                        first_fragment = false;
                    }

                    self.controller.on_token(turn.generation, &fragment);
                    print!("{fragment}");
                    io::stdout().flush()?;
                }
                Err(e) => {
                    if first_fragment {
                        spinner.stop();
                    } else {
                        println!();
                    }
                    self.fail_turn(turn.generation, &e);
                    return Ok(());
                }
            }
        }

        if first_fragment {
            spinner.stop();
        }

        self.controller.on_complete(turn.generation);
        println!();
        println!();
        Ok(())
    }

    /// Surfaces a failed turn and returns the session to idle.
    ///
    /// Partial content stays in the transcript, so context already received
    /// is not lost for the next turn.
    fn fail_turn(&mut self, generation: Generation, error: &CompletionError) {
        self.controller.on_error(generation, error.kind());
        ui::print_error(&error.to_string());
        self.controller.dismiss_error();
    }
}

use anyhow::{Result, bail};
use futures_util::StreamExt;
use std::io::{self, Write};
use std::time::Duration;

use crate::completion::{CompletionClient, CompletionRequest};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::input;
use crate::output;
use crate::session::SessionController;
use crate::ui::Spinner;

pub struct AskOptions {
    pub file: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
}

/// Runs a single turn: read the prompt, stream the reply to stdout.
///
/// The answer goes to stdout for piping; progress goes to stderr and is
/// suppressed in quiet mode.
pub async fn run_ask(options: AskOptions) -> Result<()> {
    let manager = ConfigManager::new();
    let config_file = manager.load_or_default();

    let resolve_options = ResolveOptions {
        provider: options.provider.clone(),
        model: options.model.clone(),
    };
    let config = resolve_config(&resolve_options, &config_file)?;

    let prompt = input::read_prompt(options.file.as_deref())?;

    if prompt.trim().is_empty() {
        bail!("Error: Input is empty");
    }

    let client = CompletionClient::new(
        config.endpoint.clone(),
        config.api_key.clone(),
        Duration::from_secs(config.timeout_secs),
    )?;

    // Single-turn session; the same controller the REPL uses drives the
    // transcript and the streaming state.
    let mut controller = SessionController::new();
    controller.update_draft(prompt);
    let Some(turn) = controller.submit() else {
        bail!("Error: Input is empty");
    };

    let request = CompletionRequest {
        model: config.model.clone(),
        system_prompt: Some(config.system_prompt.clone()),
        context: turn.context,
    };

    let spinner = if output::quiet() {
        None
    } else {
        Some(Spinner::new("Thinking..."))
    };

    let mut stream = match client.complete_stream(&request).await {
        Ok(stream) => stream,
        Err(e) => {
            controller.on_error(turn.generation, e.kind());
            return Err(e.into());
        }
    };

    let mut printed_any = false;

    while let Some(item) = stream.next().await {
        match item {
            Ok(fragment) => {
                if !printed_any {
                    if let Some(spinner) = &spinner {
                        spinner.stop();
                    }
                    printed_any = true;
                }

                controller.on_token(turn.generation, &fragment);
                print!("{fragment}");
                io::stdout().flush()?;
            }
            Err(e) => {
                if printed_any {
                    println!();
                }
                controller.on_error(turn.generation, e.kind());
                return Err(e.into());
            }
        }
    }

    if let Some(spinner) = &spinner {
        spinner.stop();
    }

    controller.on_complete(turn.generation);

    if printed_any {
        println!();
    }

    Ok(())
}

use anyhow::Result;
use clap::Parser;

use skygpt_cli::cli::commands::{ask, chat, configure, providers};
use skygpt_cli::cli::{Args, Command};
use skygpt_cli::output;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(args.quiet);

    match args.command {
        Some(Command::Chat { provider, model }) => {
            let options = chat::ChatOptions { provider, model };
            chat::run_chat(options).await?;
        }
        Some(Command::Providers { provider }) => {
            providers::print_providers(provider.as_deref())?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            let options = ask::AskOptions {
                file: args.file,
                provider: args.provider,
                model: args.model,
            };
            ask::run_ask(options).await?;
        }
    }

    Ok(())
}

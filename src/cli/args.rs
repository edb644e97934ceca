use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "skygpt")]
#[command(about = "Streaming AI chat CLI")]
#[command(version)]
pub struct Args {
    /// Prompt file for one-shot mode (reads from stdin if not provided)
    pub file: Option<String>,

    /// Provider name
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Suppress progress output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat mode
    Chat {
        /// Provider name
        #[arg(short = 'p', long)]
        provider: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,
    },
    /// List configured providers
    Providers {
        /// Show details for a specific provider
        provider: Option<String>,
    },
    /// Configure skygpt defaults
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

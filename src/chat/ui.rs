//! Chat mode UI components.

use crate::ui::Style;

use super::command;
use super::repl::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Interactive Chat Mode",
        Style::header("skygpt"),
        Style::dim(format!("v{VERSION}"))
    );
    println!(
        "{}",
        Style::dim("How can I assist you today? Start the conversation below.")
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &SessionConfig, transcript_len: usize) {
    let row = |label: &str, value: String| {
        println!("  {} {}", Style::dim(format!("{label:<9}")), value);
    };

    println!("{}", Style::header("Configuration"));
    row("provider", Style::value(&config.provider_name));
    row("model", Style::value(&config.model));
    row("endpoint", Style::dim(&config.endpoint));
    row("timeout", Style::dim(format!("{}s", config.timeout_secs)));
    row("messages", Style::dim(transcript_len.to_string()));
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Commands"));
    for (name, help) in command::help_entries() {
        println!("  {} {}", Style::value(format!("{name:<18}")), Style::dim(help));
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

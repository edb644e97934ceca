//! Prompt input for one-shot mode.

use anyhow::{Context, Result, bail};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Prompts larger than this are rejected outright.
pub const MAX_PROMPT_BYTES: u64 = 1024 * 1024;

/// Reads the prompt from `path`, or from stdin when no path is given.
pub fn read_prompt(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => from_file(Path::new(path)),
        None => from_stdin(),
    }
}

fn from_file(path: &Path) -> Result<String> {
    let len = fs::metadata(path)
        .with_context(|| format!("Failed to access {}", path.display()))?
        .len();
    if len > MAX_PROMPT_BYTES {
        bail!(oversize_message(len));
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn from_stdin() -> Result<String> {
    let mut raw = Vec::new();
    std::io::stdin()
        .lock()
        .take(MAX_PROMPT_BYTES + 1)
        .read_to_end(&mut raw)
        .context("Failed to read from stdin")?;

    if raw.len() as u64 > MAX_PROMPT_BYTES {
        bail!(oversize_message(raw.len() as u64));
    }

    String::from_utf8(raw).context("Prompt is not valid UTF-8")
}

fn oversize_message(len: u64) -> String {
    format!(
        "Prompt is {:.1} MB, the limit is 1 MB. Trim it down or split it up.",
        len as f64 / (1024.0 * 1024.0)
    )
}

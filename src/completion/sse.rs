//! Server-Sent Events (SSE) parser for OpenAI-compatible streaming responses.

use bytes::Bytes;
use futures_util::Stream;
use serde::Deserialize;

use super::error::CompletionError;

/// Response structure for streaming chat completions.
#[derive(Debug, Deserialize)]
struct StreamResponse {
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: Delta,
}

#[derive(Debug, Deserialize)]
struct Delta {
    content: Option<String>,
}

/// Converts a raw SSE byte stream into a stream of reply fragments.
///
/// Handles buffering and line splitting; the stream ends at `data: [DONE]`.
/// Transport errors surface as items so the caller can map them onto the
/// session state without losing fragments already applied.
pub fn sse_to_fragment_stream(
    byte_stream: impl Stream<Item = reqwest::Result<Bytes>> + Send + 'static,
) -> impl Stream<Item = Result<String, CompletionError>> + Send {
    async_stream::stream! {
        use futures_util::StreamExt;

        let mut byte_stream = std::pin::pin!(byte_stream);
        let mut buffer = String::new();

        while let Some(chunk_result) = byte_stream.next().await {
            let chunk = match chunk_result {
                Ok(c) => c,
                Err(e) => {
                    yield Err(CompletionError::from_reqwest(&e));
                    return;
                }
            };

            buffer.push_str(&String::from_utf8_lossy(&chunk));

            while let Some(line_end) = buffer.find('\n') {
                let line: String = buffer.drain(..=line_end).collect();

                if line.trim() == "data: [DONE]" {
                    return;
                }
                if let Some(fragment) = parse_sse_line(line.trim()) {
                    yield Ok(fragment);
                }
            }
        }
    }
}

/// Parses a single SSE line and extracts the reply fragment.
///
/// Returns `None` for non-data lines, empty deltas, and parse errors.
fn parse_sse_line(line: &str) -> Option<String> {
    let json_str = line.strip_prefix("data: ")?;

    let response = serde_json::from_str::<StreamResponse>(json_str).ok()?;

    let fragment: String = response
        .choices
        .into_iter()
        .filter_map(|c| c.delta.content)
        .filter(|c| !c.is_empty())
        .collect();

    if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    }
}

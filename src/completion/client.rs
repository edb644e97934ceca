use std::borrow::Cow;
use std::pin::Pin;
use std::time::Duration;

use anyhow::{Context, Result};
use futures_util::Stream;
use reqwest::Client;
use serde::Serialize;

use crate::session::Message;

use super::error::CompletionError;
use super::sse::sse_to_fragment_stream;

/// One completion call: the model plus the transcript to send as context.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub system_prompt: Option<String>,
    pub context: Vec<Message>,
}

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

/// Stream of reply fragments for one request.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, CompletionError>> + Send>>;

/// HTTP client for an OpenAI-compatible `/v1/chat/completions` endpoint.
pub struct CompletionClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl CompletionClient {
    /// Builds a client with the given request timeout.
    ///
    /// The timeout spans the whole response, so a stream that stalls past it
    /// surfaces as [`CompletionError::Timeout`].
    pub fn new(endpoint: String, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Sends the transcript and returns a stream of reply fragments.
    ///
    /// The request itself (connect, status check) fails with a
    /// [`CompletionError`]; later transport failures surface as stream items.
    pub async fn complete_stream(
        &self,
        request: &CompletionRequest,
    ) -> Result<FragmentStream, CompletionError> {
        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let mut messages: Vec<WireMessage<'_>> = Vec::with_capacity(request.context.len() + 1);
        if let Some(system_prompt) = &request.system_prompt {
            messages.push(WireMessage {
                role: "system",
                content: Cow::Borrowed(system_prompt),
            });
        }
        for message in &request.context {
            messages.push(WireMessage {
                role: message.role.as_str(),
                content: Cow::Borrowed(&message.content),
            });
        }

        let chat_request = ChatCompletionRequest {
            model: &request.model,
            messages,
            stream: true,
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| CompletionError::from_reqwest(&e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Endpoint { status, body });
        }

        Ok(Box::pin(sse_to_fragment_stream(response.bytes_stream())))
    }
}

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::GenerationSettings;

/// One synchronous chat call. `stream` is always false here: the pipeline
/// only supports whole-response completions.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    pub stream: bool,
    pub timeout: Duration,
}

impl ChatRequest {
    pub fn new(
        settings: &GenerationSettings,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> Self {
        Self {
            model: settings.model.clone(),
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
            temperature: settings.temperature,
            stream: false,
            timeout: settings.timeout,
        }
    }
}

#[derive(Serialize)]
struct ChatPayload<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    options: GenerationOptions,
    stream: bool,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct GenerationOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatEnvelope {
    #[serde(default)]
    message: Option<EnvelopeMessage>,
}

#[derive(Deserialize)]
struct EnvelopeMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Failure of a single chat call. Transport failures may be worth retrying
/// with the same request; protocol failures are not.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("chat endpoint {url} returned status {status}")]
    UnexpectedStatus { url: String, status: StatusCode },

    #[error("chat endpoint {url} returned an undecodable body: {source}")]
    UndecodableBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("chat endpoint {url} response is missing message.content")]
    MissingContent { url: String },
}

impl ChatError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ChatError::Transport { .. })
    }

    pub fn is_protocol(&self) -> bool {
        !self.is_transport()
    }
}

/// Blocking client for an Ollama-style `/api/chat` endpoint. Holds its
/// endpoint explicitly so sessions against different servers can coexist.
pub struct ChatClient {
    http: Client,
    base_url: String,
}

impl ChatClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/chat", self.base_url.trim_end_matches('/'))
    }

    /// Send one request and return the raw completion text. Blocks until
    /// the endpoint answers or the request timeout expires.
    pub fn complete(&self, request: &ChatRequest) -> Result<String, ChatError> {
        let url = self.endpoint();
        let payload = ChatPayload {
            model: &request.model,
            messages: vec![
                WireMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                WireMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            options: GenerationOptions {
                temperature: request.temperature,
            },
            stream: request.stream,
        };

        tracing::debug!(model = %request.model, %url, "sending chat request");

        let response = self
            .http
            .post(&url)
            .timeout(request.timeout)
            .json(&payload)
            .send()
            .map_err(|source| ChatError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::UnexpectedStatus { url, status });
        }

        let envelope: ChatEnvelope =
            response
                .json()
                .map_err(|source| ChatError::UndecodableBody {
                    url: url.clone(),
                    source,
                })?;

        envelope
            .message
            .and_then(|message| message.content)
            .ok_or(ChatError::MissingContent { url })
    }
}

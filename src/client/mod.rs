use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tracing::{debug, warn};

mod error;

pub use error::AnalysisError;

use crate::config::ClientConfig;
use crate::prompt::Prompt;

/// Wire request body for the chat-completion endpoint:
/// `{"model": ..., "messages": [{"role": "user", "content": ...}]}`.
/// Serialized with serde so quotes, backslashes and control characters in the
/// prompt are escaped per the JSON spec.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatRequest {
    pub(crate) fn from_prompt(model: &str, prompt: &Prompt) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.as_str().to_string(),
            }],
        }
    }
}

/// Single-shot client for a remote chat-completion service. Holds no state
/// between calls beyond reqwest's own connection pool, so one instance can be
/// shared freely across tasks.
pub struct CompletionClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl CompletionClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends one completion request and returns the raw response body.
    ///
    /// Any well-formed HTTP response passes through unparsed, whatever its
    /// status code; interpreting the payload is the caller's job. Only
    /// transport-level failures (DNS, connection, TLS, timeout) surface as
    /// errors. No retries.
    pub async fn complete(&self, prompt: &Prompt) -> Result<String, AnalysisError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.config.api_key))
                .map_err(|_| AnalysisError::Transport("API key is not a valid header value".to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let body = ChatRequest::from_prompt(&self.config.model, prompt);

        debug!(
            endpoint = %self.config.endpoint_url,
            model = %self.config.model,
            prompt_len = prompt.as_str().len(),
            "dispatching completion request"
        );

        let response = self
            .client
            .post(&self.config.endpoint_url)
            .headers(headers)
            .timeout(self.config.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let error = AnalysisError::from(e);
                warn!("completion request failed: {}", error);
                error
            })?;

        let status = response.status();
        let text = response.text().await.map_err(AnalysisError::from)?;

        debug!(status = %status, body_len = text.len(), "completion response received");
        Ok(text)
    }

    /// Like [`complete`](Self::complete), but races the request against a
    /// cancel signal. Firing the sender aborts the in-flight request and
    /// yields `Cancelled`; merely dropping the sender does not cancel.
    pub async fn complete_with_cancel(
        &self,
        prompt: &Prompt,
        mut cancel: oneshot::Receiver<()>,
    ) -> Result<String, AnalysisError> {
        let request = self.complete(prompt);
        tokio::pin!(request);
        let mut cancellable = true;

        loop {
            tokio::select! {
                result = &mut request => return result,
                signal = &mut cancel, if cancellable => {
                    match signal {
                        Ok(()) => return Err(AnalysisError::Cancelled),
                        // Sender dropped without firing; keep waiting.
                        Err(_) => cancellable = false,
                    }
                }
            }
        }
    }
}

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.deepseek.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek-coder";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the completion service. The API key always comes
/// from the embedding application (environment, secret store, or user input);
/// there is no default and it must never appear in code or logs.
#[derive(Clone)]
pub struct ClientConfig {
    pub endpoint_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(endpoint_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Loads configuration from `CODEPROBE_API_KEY` (required),
    /// `CODEPROBE_ENDPOINT`, `CODEPROBE_MODEL` and `CODEPROBE_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("CODEPROBE_API_KEY")
            .context("CODEPROBE_API_KEY is not set; add it to your environment or .env file")?;

        let endpoint_url =
            env::var("CODEPROBE_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let model = env::var("CODEPROBE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout_secs = match env::var("CODEPROBE_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("CODEPROBE_TIMEOUT_SECS must be a whole number of seconds")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            endpoint_url,
            api_key,
            model,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// The key must not leak through {:?} in logs or error reports.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint_url", &self.endpoint_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

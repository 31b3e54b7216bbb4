//! OpenAI-compatible chat completions agent.
//!
//! Works with any endpoint that speaks the `chat/completions` protocol,
//! including Gemini's OpenAI compatibility layer (the default).

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::{Result, SiftError};

use super::prompts;
use super::provider::{AgentConfig, AgentContext, QueryAgent};

/// Environment variables checked for an API key, in order.
pub const API_KEY_VARS: &[&str] = &["JOBSIFT_API_KEY", "GEMINI_API_KEY", "OPENAI_API_KEY"];

/// Agent backed by an OpenAI-compatible HTTP API.
pub struct OpenAICompatibleAgent {
    client: Client,
    api_key: String,
    endpoint: String,
    config: AgentConfig,
}

impl OpenAICompatibleAgent {
    /// Create a new agent with the given API key and default configuration.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, AgentConfig::default())
    }

    /// Create a new agent with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: AgentConfig) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SiftError::Config("API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SiftError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            endpoint: completions_url(&config.api_base),
            config,
        })
    }

    /// Create from environment variables (see [`API_KEY_VARS`]).
    pub fn from_env(config: AgentConfig) -> Result<Self> {
        let api_key = API_KEY_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
            .ok_or_else(|| {
                SiftError::Config(format!(
                    "No API key found. Set one of: {}",
                    API_KEY_VARS.join(", ")
                ))
            })?;
        Self::with_config(api_key, config)
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|e| SiftError::Config(format!("Invalid API key: {}", e)))?,
        );
        Ok(headers)
    }

    /// Send a system + user message pair and return the completion text.
    fn send_message(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "messages": [
                {
                    "role": "system",
                    "content": system_prompt
                },
                {
                    "role": "user",
                    "content": user_prompt
                }
            ]
        });

        debug!(endpoint = %self.endpoint, model = %self.config.model, "sending agent request");

        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .map_err(|e| SiftError::Agent(format!("API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            return Err(SiftError::Agent(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        let api_response: ChatResponse = response
            .json()
            .map_err(|e| SiftError::Agent(format!("Failed to parse API response: {}", e)))?;

        extract_text(api_response)
    }
}

impl QueryAgent for OpenAICompatibleAgent {
    fn run(&self, query: &str, context: &AgentContext<'_>) -> Result<String> {
        let system = prompts::system_prompt(context.style);
        let prompt = prompts::query_prompt(query, context, self.config.max_context_rows)?;
        self.send_message(&system, &prompt)
    }

    fn name(&self) -> &str {
        "openai-compatible"
    }
}

/// Join the API base and the completions path.
fn completions_url(api_base: &str) -> String {
    format!("{}/chat/completions", api_base.trim_end_matches('/'))
}

/// First non-empty choice of a completion response.
fn extract_text(response: ChatResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .filter_map(|choice| choice.message.content)
        .find(|content| !content.trim().is_empty())
        .ok_or_else(|| SiftError::Agent("No response from agent".to_string()))
}

// Response types for the chat completions API

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_url() {
        assert_eq!(
            completions_url("https://generativelanguage.googleapis.com/v1beta/openai/"),
            "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions"
        );
        assert_eq!(
            completions_url("http://localhost:11434/v1"),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn test_extract_text() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"Two jobs match."}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "Two jobs match.");
    }

    #[test]
    fn test_extract_text_empty_is_error() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert!(matches!(extract_text(response), Err(SiftError::Agent(_))));
    }

    #[test]
    fn test_empty_api_key_rejected() {
        assert!(matches!(
            OpenAICompatibleAgent::new("  "),
            Err(SiftError::Config(_))
        ));
    }
}

use crate::config::LlmConfig;
use crate::error::{FingraphError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::prompt;

/// Request structure for the Ollama generate API
#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    /// "json" forces structured output
    format: String,
}

/// Response structure from the Ollama generate API
#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Ollama completion client
///
/// Talks to a local Ollama server's /api/generate endpoint with JSON-mode
/// output and a bounded retry loop for unparseable responses.
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
    max_retries: usize,
}

impl OllamaClient {
    /// Create a client from the `[llm]` configuration section.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created (should not happen in
    /// normal operation).
    pub fn new(config: &LlmConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_retries: config.max_retries,
        }
    }

    /// Run one completion and return the raw response text.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);

        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
            format: "json".to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| FingraphError::Llm(format!("Network error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FingraphError::Llm(format!(
                "Ollama request failed with status {}: {}",
                status, body
            )));
        }

        let generate_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| FingraphError::Llm(format!("Invalid Ollama response: {}", e)))?;

        Ok(generate_response.response)
    }

    /// Run a completion and keep re-prompting until the output parses as JSON.
    ///
    /// Each retry feeds the invalid output back through a correction prompt.
    pub async fn generate_json_with_retry(&self, prompt: &str) -> Result<String> {
        let mut response = self.generate(prompt).await?;

        for attempt in 0..self.max_retries {
            if serde_json::from_str::<serde_json::Value>(&response).is_ok() {
                return Ok(response);
            }

            log::warn!(
                "Model output was not valid JSON (attempt {}/{}), re-prompting",
                attempt + 1,
                self.max_retries
            );
            response = self.generate(&prompt::build_retry_prompt(&response)).await?;
        }

        if serde_json::from_str::<serde_json::Value>(&response).is_ok() {
            return Ok(response);
        }

        Err(FingraphError::Llm(format!(
            "Failed to get valid JSON after {} retries",
            self.max_retries
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = GenerateRequest {
            model: "llama3.1:8b".to_string(),
            prompt: "extract".to_string(),
            stream: false,
            format: "json".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3.1:8b");
        assert_eq!(json["stream"], false);
        assert_eq!(json["format"], "json");
    }

    #[test]
    fn test_response_deserialization() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"response": "{\"extractions\": []}", "done": true}"#).unwrap();
        assert_eq!(response.response, r#"{"extractions": []}"#);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = LlmConfig {
            base_url: "http://localhost:11434/".to_string(),
            ..LlmConfig::default()
        };
        let client = OllamaClient::new(&config);
        assert_eq!(client.base_url, "http://localhost:11434");
    }
}

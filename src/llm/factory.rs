use anyhow::Result;
use tracing::debug;

use super::client::LlmClient;
use super::client::MockLlmClient;
use super::client_impl::{AnthropicClient, GeminiClient, OpenAIClient};
use crate::config::{LlmConfig, Provider};

const OLLAMA_BASE_URL: &str = "http://localhost:11434/v1";

/// Create an LLM client based on configuration
pub fn create_client(llm: &LlmConfig, dry_run: bool) -> Result<Box<dyn LlmClient>> {
    if dry_run {
        debug!("Dry run: using mock LLM client");
        return Ok(Box::new(MockLlmClient::new()));
    }

    let api_key = llm.get_api_key()?;
    let max_tokens = llm.get_max_tokens();
    let model = llm.model.clone();
    let timeout = llm.timeout_secs;

    debug!("Creating {} client for model {}", llm.provider, model);

    match llm.provider {
        Provider::Anthropic => {
            let client = match &llm.base_url {
                Some(url) => {
                    AnthropicClient::with_base_url(api_key, model, url.clone(), max_tokens, timeout)?
                }
                None => AnthropicClient::new(api_key, model, max_tokens, timeout)?,
            };
            Ok(Box::new(client.with_temperature(llm.temperature)))
        }

        Provider::OpenAI => {
            let client = match &llm.base_url {
                Some(url) => {
                    OpenAIClient::with_base_url(api_key, model, url.clone(), max_tokens, timeout)?
                }
                None => OpenAIClient::new(api_key, model, max_tokens, timeout)?,
            };
            Ok(Box::new(client.with_temperature(llm.temperature)))
        }

        Provider::OpenAICompatible => {
            let base_url = llm
                .base_url
                .clone()
                .unwrap_or_else(|| OLLAMA_BASE_URL.to_string());

            Ok(Box::new(
                OpenAIClient::with_base_url(api_key, model, base_url, max_tokens, timeout)?
                    .with_temperature(llm.temperature),
            ))
        }

        Provider::Gemini => {
            let client = match &llm.base_url {
                Some(url) => {
                    GeminiClient::with_base_url(api_key, model, url.clone(), max_tokens, timeout)?
                }
                None => GeminiClient::new(api_key, model, max_tokens, timeout)?,
            };
            Ok(Box::new(client.with_temperature(llm.temperature)))
        }
    }
}

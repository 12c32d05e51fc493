use std::time::Duration;

use async_trait::async_trait;
use log::{ debug, info, warn };
use serde::Deserialize;

use crate::config::Credentials;
use crate::errors::{ ComplianceError, ComplianceResult };
use crate::implementations::config::AgentConfig;
use crate::models::chat::{ ChatMessage, ChatRequest };
use crate::traits::chat_model::ChatModel;

#[derive(Debug, Deserialize)]
struct ChatResponseChoice {
    message: ChatMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: usize,
    #[serde(default)]
    completion_tokens: usize,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatResponseChoice>,
    #[serde(default)]
    usage: Option<Usage>,
}

/// Client for Groq, OpenAI and other OpenAI-compatible chat completion APIs
#[derive(Clone)]
pub struct OpenAiCompatibleClient {
    provider: String,
    model: String,
    endpoint: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl OpenAiCompatibleClient {
    pub fn new(
        provider: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration
    ) -> ComplianceResult<Self> {
        let http_client = reqwest::Client
            ::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ComplianceError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            provider: provider.into(),
            model: model.into(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            http_client,
        })
    }

    /// Build a client for whichever provider the credentials allow
    pub fn from_config(config: &AgentConfig, credentials: &Credentials) -> ComplianceResult<Self> {
        let (provider, provider_config, api_key) = config.resolve_provider(credentials)?;
        Self::new(
            provider,
            provider_config.model,
            provider_config.endpoint,
            api_key,
            Duration::from_secs(config.request_timeout_secs)
        )
    }
}

#[async_trait]
impl ChatModel for OpenAiCompatibleClient {
    fn provider(&self) -> &str {
        &self.provider
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &ChatRequest) -> ComplianceResult<ChatMessage> {
        info!("Making LLM API request to {}", self.provider);
        debug!("API endpoint: {}", self.endpoint);
        debug!("Model: {}", request.model);
        debug!("Temperature: {}", request.temperature);
        debug!("Messages: {}, tools: {}", request.messages.len(), request.tools.len());

        let response = self.http_client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send().await
            .map_err(|e| {
                let error_msg = format!("Network error when calling {} API: {}", self.provider, e);
                warn!("{}", error_msg);
                if e.is_timeout() {
                    warn!("Request timed out");
                }
                if e.is_connect() {
                    warn!("Connection error - check network connectivity");
                }
                ComplianceError::NetworkError(error_msg)
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response
                .text().await
                .unwrap_or_else(|_| "Failed to get error message".to_string());

            warn!("API error: HTTP {} - {}", status, error_text);
            return Err(ComplianceError::HttpError {
                service: self.provider.clone(),
                status,
                message: error_text,
            });
        }

        let response_text = response.text().await.map_err(|e| {
            warn!("Failed to get response text: {}", e);
            ComplianceError::ParseError(e.to_string())
        })?;
        debug!("Response length: {} characters", response_text.len());

        parse_chat_response(&response_text)
    }
}

/// Extract the first choice's message from a chat completions response body
pub fn parse_chat_response(body: &str) -> ComplianceResult<ChatMessage> {
    let response: ChatResponse = serde_json::from_str(body).map_err(|e| {
        warn!("Failed to parse API response: {}", e);
        ComplianceError::ParseError(format!("Invalid chat completion response: {}", e))
    })?;

    if let Some(usage) = &response.usage {
        debug!("Token usage: {} prompt, {} completion", usage.prompt_tokens, usage.completion_tokens);
    }

    let choice = response.choices.into_iter().next().ok_or_else(|| {
        warn!("API returned empty choices array");
        ComplianceError::ParseError("No choices in API response".to_string())
    })?;

    if let Some(reason) = &choice.finish_reason {
        debug!("Finish reason: {}", reason);
    }

    Ok(choice.message)
}

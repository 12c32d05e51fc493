use async_trait::async_trait;

use crate::errors::ComplianceResult;
use crate::models::chat::{ ChatMessage, ChatRequest };

/// An inference provider speaking the chat completions protocol
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Provider name, for logging
    fn provider(&self) -> &str;

    /// Model the requests should name
    fn model(&self) -> &str;

    /// Send one request and return the assistant message of the first choice
    async fn complete(&self, request: &ChatRequest) -> ComplianceResult<ChatMessage>;
}

use std::collections::HashMap;

use async_trait::async_trait;
use log::{ debug, info, warn };
use serde::Deserialize;

use crate::config::Credentials;
use crate::errors::{ ComplianceError, ComplianceResult };
use crate::implementations::chat_client::OpenAiCompatibleClient;
use crate::implementations::config::AgentConfig;
use crate::implementations::serper_search::SerperSearchTool;
use crate::models::analysis::{ AnalysisRequest, AnalysisResult };
use crate::models::chat::{ ChatMessage, ChatRequest, ToolCall, ToolDefinition };
use crate::traits::agent_pipeline::AgentPipeline;
use crate::traits::chat_model::ChatModel;
use crate::traits::search_tool::{ format_hits, SearchTool };

pub const SEARCH_TOOL_NAME: &str = "web_search";

const FINAL_ANSWER_PROMPT: &str =
    "You have used the search tool as many times as allowed. Using only what you found so far, give your final answer now. Return the complete report, not a summary.";

#[derive(Debug, Deserialize)]
struct SearchArgs {
    query: String,
}

/// One agent, one task, run sequentially.
///
/// The agent talks to the chat model and may call the search tool between
/// turns. The last answer without tool calls is the report.
pub struct ComplianceCrew<M, S> {
    config: AgentConfig,
    model: M,
    search: S,
}

impl ComplianceCrew<OpenAiCompatibleClient, SerperSearchTool> {
    /// Wire the HTTP-backed model and search tool from the given keys
    pub fn from_credentials(config: AgentConfig, credentials: &Credentials) -> ComplianceResult<Self> {
        let model = OpenAiCompatibleClient::from_config(&config, credentials)?;
        let search = SerperSearchTool::from_config(&config, credentials)?;
        Ok(Self::new(config, model, search))
    }
}

impl<M: ChatModel, S: SearchTool> ComplianceCrew<M, S> {
    pub fn new(config: AgentConfig, model: M, search: S) -> Self {
        Self { config, model, search }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn search(&self) -> &S {
        &self.search
    }

    /// Persona given to the model as the system message
    pub fn system_prompt(&self) -> String {
        let agent = &self.config.agent;
        format!("You are {}. {}\nYour personal goal is: {}", agent.role, agent.backstory, agent.goal)
    }

    /// Task description and expected output with the request filled in
    pub fn task_prompt(&self, request: &AnalysisRequest) -> ComplianceResult<String> {
        let mut params = HashMap::new();
        params.insert("data", request.data_json()?);
        params.insert("date", request.date.clone());

        Ok(
            format!(
                "{}\n\nThis is the expected criteria for your final answer: {}\n\nYou MUST return the actual complete content as the final answer, not a summary.",
                self.config.render_description(&params),
                self.config.render_expected_output(&params)
            )
        )
    }

    pub fn search_tool_definition(&self) -> ToolDefinition {
        ToolDefinition::function(
            SEARCH_TOOL_NAME,
            &format!(
                "Search the web. Restrict queries to official sources with 'site:{}'.",
                self.config.source_domain
            ),
            serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query"
                    }
                },
                "required": ["query"]
            })
        )
    }

    fn chat_request(&self, messages: &[ChatMessage], with_tools: bool) -> ChatRequest {
        ChatRequest {
            model: self.model.model().to_string(),
            messages: messages.to_vec(),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            tools: if with_tools { vec![self.search_tool_definition()] } else { Vec::new() },
        }
    }

    /// Run one tool call and return what the model should read back.
    ///
    /// Calls the model got wrong are answered with an explanation; failures
    /// of the search service itself are returned as errors.
    async fn run_tool(&self, call: &ToolCall) -> ComplianceResult<String> {
        if call.function.name != SEARCH_TOOL_NAME {
            warn!("Model asked for unknown tool: {}", call.function.name);
            return Ok(
                format!(
                    "Error: there is no tool named '{}'. The only available tool is '{}'.",
                    call.function.name,
                    SEARCH_TOOL_NAME
                )
            );
        }

        let args: SearchArgs = match serde_json::from_str(&call.function.arguments) {
            Ok(args) => args,
            Err(e) => {
                warn!("Malformed search arguments: {}", e);
                return Ok(
                    format!("Error: arguments must be a JSON object with a 'query' string ({}).", e)
                );
            }
        };

        let hits = self.search.search(&args.query).await?;
        Ok(format_hits(&args.query, &hits))
    }

    fn final_answer(reply: ChatMessage) -> ComplianceResult<AnalysisResult> {
        match reply.content {
            Some(content) if !content.trim().is_empty() => {
                info!("Agent returned a report of {} characters", content.len());
                Ok(AnalysisResult::new(content))
            }
            _ => Err(ComplianceError::ParseError("The agent returned an empty answer".to_string())),
        }
    }
}

#[async_trait]
impl<M: ChatModel, S: SearchTool> AgentPipeline for ComplianceCrew<M, S> {
    async fn run(&self, request: AnalysisRequest) -> ComplianceResult<AnalysisResult> {
        info!(
            "Starting compliance analysis with {} ({}), reference date {}",
            self.model.provider(),
            self.model.model(),
            request.date
        );

        let mut messages = vec![
            ChatMessage::system(self.system_prompt()),
            ChatMessage::user(self.task_prompt(&request)?)
        ];

        for iteration in 0..self.config.max_tool_iterations {
            debug!("Agent turn {}", iteration + 1);
            let reply = self.model.complete(&self.chat_request(&messages, true)).await?;
            let calls = reply.requested_tools().to_vec();

            if calls.is_empty() {
                return Self::final_answer(reply);
            }

            info!("Agent requested {} tool call(s)", calls.len());
            messages.push(reply);
            for call in &calls {
                let output = self.run_tool(call).await?;
                messages.push(ChatMessage::tool(call.id.clone(), output));
            }
        }

        info!("Tool budget of {} turns used up, asking for the final answer", self.config.max_tool_iterations);
        messages.push(ChatMessage::user(FINAL_ANSWER_PROMPT));
        let reply = self.model.complete(&self.chat_request(&messages, false)).await?;
        Self::final_answer(reply)
    }
}

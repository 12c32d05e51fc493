pub mod chat_model;
pub mod search_tool;
pub mod agent_pipeline;

// Re-export traits
pub use chat_model::ChatModel;
pub use search_tool::{ SearchTool, SearchHit };
pub use agent_pipeline::AgentPipeline;

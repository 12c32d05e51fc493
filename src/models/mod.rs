pub mod questionnaire;
pub mod answer;
pub mod analysis;
pub mod chat;

// Re-export common model types
pub use questionnaire::{ Question, QuestionKind, QUESTIONS };
pub use answer::{ Answer, ComplianceAnswerSet };
pub use analysis::{ AnalysisRequest, AnalysisResult, ReportArtifact };
pub use chat::{ ChatMessage, ChatRequest, ToolCall, ToolDefinition };

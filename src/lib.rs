pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod intake;
pub mod implementations;
pub mod workflow;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::Credentials;
pub use errors::{ AnswerError, ComplianceError, ComplianceResult };
pub use implementations::compliance_crew::ComplianceCrew;
pub use implementations::config::AgentConfig;
pub use intake::{ FormSubmission, IntakeOutcome };
pub use models::{
    analysis::{ AnalysisRequest, AnalysisResult, ReportArtifact },
    answer::{ Answer, ComplianceAnswerSet },
    questionnaire::{ Question, QuestionKind, QUESTIONS },
};
pub use traits::{ AgentPipeline, ChatModel, SearchTool };
pub use workflow::SubmissionOutcome;

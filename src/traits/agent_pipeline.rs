use async_trait::async_trait;

use crate::errors::ComplianceResult;
use crate::models::analysis::{ AnalysisRequest, AnalysisResult };

/// Turns a complete analysis request into a markdown report.
///
/// A call runs to completion or fails; it cannot be cancelled once started
/// and applies no timeout of its own beyond what the HTTP client enforces.
#[async_trait]
pub trait AgentPipeline: Send + Sync {
    async fn run(&self, request: AnalysisRequest) -> ComplianceResult<AnalysisResult>;
}

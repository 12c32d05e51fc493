use chrono::NaiveDate;
use log::{ error, info, warn };

use crate::errors::ComplianceError;
use crate::intake::{ FormSubmission, IntakeOutcome };
use crate::models::analysis::{ AnalysisRequest, ReportArtifact };
use crate::traits::agent_pipeline::AgentPipeline;

/// Hint shown with every pipeline failure
pub const CREDENTIALS_HINT: &str = "Please ensure all API keys are correctly set.";

/// What the user sees after submitting the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Some questions are unanswered; nothing was sent to the agent
    Incomplete {
        missing: usize,
        warning: String,
    },
    /// A value could not be accepted; nothing was sent to the agent
    Invalid {
        message: String,
    },
    /// The agent produced a report
    Report(ReportArtifact),
    /// The agent pipeline failed; there is no report
    Failed {
        message: String,
        hint: String,
    },
}

impl SubmissionOutcome {
    pub fn report(&self) -> Option<&ReportArtifact> {
        match self {
            SubmissionOutcome::Report(artifact) => Some(artifact),
            _ => None,
        }
    }

    /// True when the user should get a chance to re-enter API keys before trying again
    pub fn needs_credentials(&self) -> bool {
        matches!(self, SubmissionOutcome::Failed { .. })
    }
}

/// Check the form and build the request the agent gets.
///
/// An incomplete or invalid form never yields a request.
pub fn prepare(form: &FormSubmission, date: NaiveDate) -> Result<AnalysisRequest, SubmissionOutcome> {
    let outcome = form.review().map_err(|e| {
        warn!("Rejected answer: {}", e);
        SubmissionOutcome::Invalid { message: e.to_string() }
    })?;

    match outcome {
        IntakeOutcome::Complete(answers) => {
            let request = AnalysisRequest::build(answers, date);
            info!("Built analysis request with {} answers dated {}", request.answers.len(), request.date);
            Ok(request)
        }
        incomplete => {
            let missing = incomplete.missing();
            warn!("Form incomplete, {} questions unanswered", missing);
            Err(SubmissionOutcome::Incomplete {
                missing,
                warning: incomplete.warning().unwrap_or_default(),
            })
        }
    }
}

/// Run the agent once and turn its result, or its failure, into an outcome
pub async fn invoke<P: AgentPipeline + ?Sized>(pipeline: &P, request: AnalysisRequest) -> SubmissionOutcome {
    match pipeline.run(request).await {
        Ok(result) => {
            info!("Compliance analysis completed");
            SubmissionOutcome::Report(ReportArtifact::from(result))
        }
        Err(e) => pipeline_failure(&e),
    }
}

/// Handle one form submission from start to finish
pub async fn submit<P: AgentPipeline + ?Sized>(
    pipeline: &P,
    form: &FormSubmission,
    date: NaiveDate
) -> SubmissionOutcome {
    match prepare(form, date) {
        Ok(request) => invoke(pipeline, request).await,
        Err(outcome) => outcome,
    }
}

/// The generic message shown for any failure of the agent pipeline
pub fn pipeline_failure(err: &ComplianceError) -> SubmissionOutcome {
    error!("Compliance analysis failed: {}", err);
    SubmissionOutcome::Failed {
        message: format!("An error occurred: {}", err),
        hint: CREDENTIALS_HINT.to_string(),
    }
}

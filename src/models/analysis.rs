use std::fs;
use std::path::{ Path, PathBuf };

use chrono::NaiveDate;
use log::info;

use crate::errors::ComplianceResult;
use crate::models::answer::ComplianceAnswerSet;

/// Format of the reference date handed to the agent, e.g. 05-04-2025
pub const REFERENCE_DATE_FORMAT: &str = "%d-%m-%Y";

/// File name the report is offered under
pub const REPORT_FILE_NAME: &str = "compliance_report.md";

pub const REPORT_CONTENT_TYPE: &str = "text/markdown";

/// Everything the agent needs for one report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub answers: ComplianceAnswerSet,
    /// Date due dates are computed from, DD-MM-YYYY
    pub date: String,
}

impl AnalysisRequest {
    /// Pair a complete answer set with the reference date
    pub fn build(answers: ComplianceAnswerSet, date: NaiveDate) -> Self {
        Self {
            answers,
            date: format_reference_date(date),
        }
    }

    /// The answers as a JSON array of `{question, answer}` objects
    pub fn data_json(&self) -> ComplianceResult<String> {
        Ok(serde_json::to_string_pretty(&self.answers)?)
    }
}

pub fn format_reference_date(date: NaiveDate) -> String {
    date.format(REFERENCE_DATE_FORMAT).to_string()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Markdown returned by the agent. Its content is not inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub markdown: String,
}

impl AnalysisResult {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self { markdown: markdown.into() }
    }
}

/// The downloadable form of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub content: String,
}

impl ReportArtifact {
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the report into `dir` under its fixed file name
    pub fn save(&self, dir: &Path) -> ComplianceResult<PathBuf> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        let path = dir.join(self.file_name);
        fs::write(&path, self.content.as_bytes())?;
        info!("Report written to {} ({} bytes)", path.display(), self.content.len());
        Ok(path)
    }
}

impl From<AnalysisResult> for ReportArtifact {
    fn from(result: AnalysisResult) -> Self {
        Self {
            file_name: REPORT_FILE_NAME,
            content_type: REPORT_CONTENT_TYPE,
            content: result.markdown,
        }
    }
}

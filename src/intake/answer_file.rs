//! Answer files let the questionnaire be filled in ahead of time.
//!
//! Two YAML shapes are accepted (JSON works too, being valid YAML):
//!
//! ```yaml
//! - question: "1. What is the type of your company? ..."
//!   answer: Private
//! - question: "7. What is your company's Paid-up Share Capital? (in ₹ Crores)"
//!   answer: 2.5
//! ```
//!
//! or a map keyed by question number:
//!
//! ```yaml
//! 1: Private
//! 7: 2.5
//! ```
//!
//! Map keys may also be quoted, as they always are in JSON. An empty file
//! is an empty form.

use std::fs;
use std::path::Path;

use log::info;
use serde::{ Deserialize, Serialize };
use serde_yaml::{ Mapping, Value };

use crate::errors::{ AnswerError, ComplianceError, ComplianceResult };
use crate::intake::FormSubmission;
use crate::models::questionnaire;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswerFile {
    Entries(Vec<AnswerEntry>),
    ByOrdinal(Mapping),
}

#[derive(Debug, Serialize, Deserialize)]
struct AnswerEntry {
    question: String,
    #[serde(default)]
    answer: Value,
}

/// Read an answer file into a form submission
pub fn load_answer_file(path: &Path) -> ComplianceResult<FormSubmission> {
    let contents = fs::read_to_string(path)?;
    let submission = parse_answer_file(&contents)?;
    info!("Loaded answers from {}", path.display());
    Ok(submission)
}

pub fn parse_answer_file(contents: &str) -> ComplianceResult<FormSubmission> {
    let mut submission = FormSubmission::new();
    if contents.trim().is_empty() {
        return Ok(submission);
    }

    let document: Value = serde_yaml::from_str(contents)?;
    if document.is_null() {
        return Ok(submission);
    }
    let file: AnswerFile = serde_yaml::from_value(document).map_err(|_| {
        ComplianceError::ConfigError(
            "Answer file must be a list of {question, answer} entries or a map keyed by question number".to_string()
        )
    })?;

    match file {
        AnswerFile::Entries(entries) => {
            for entry in entries {
                let ordinal = resolve_ordinal(&entry.question).ok_or_else(||
                    ComplianceError::ConfigError(
                        format!("Answer file names an unknown question: {}", entry.question)
                    )
                )?;
                if submission.raw(ordinal).is_some() {
                    return Err(AnswerError::DuplicateAnswer(ordinal).into());
                }
                submission.set(ordinal, value_to_string(&entry.answer))?;
            }
        }
        AnswerFile::ByOrdinal(map) => {
            for (key, value) in map {
                let ordinal = resolve_key(&key).ok_or_else(||
                    ComplianceError::ConfigError(
                        format!("Answer file names an unknown question: {}", value_to_string(&key))
                    )
                )?;
                if submission.raw(ordinal).is_some() {
                    return Err(AnswerError::DuplicateAnswer(ordinal).into());
                }
                submission.set(ordinal, value_to_string(&value))?;
            }
        }
    }

    Ok(submission)
}

/// A blank answer file listing every question
pub fn template_yaml() -> ComplianceResult<String> {
    let entries: Vec<AnswerEntry> = questionnaire
        ::questionnaire()
        .iter()
        .map(|q| AnswerEntry {
            question: q.label(),
            answer: Value::String(String::new()),
        })
        .collect();
    Ok(serde_yaml::to_string(&entries)?)
}

/// Match "7. What is ..." by its number, or the bare prompt by its text
fn resolve_ordinal(question: &str) -> Option<usize> {
    let question = question.trim();
    let digits: String = question
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if let Ok(ordinal) = digits.parse::<usize>() {
        return questionnaire::question(ordinal).map(|q| q.ordinal);
    }

    questionnaire
        ::questionnaire()
        .iter()
        .find(|q| q.prompt.eq_ignore_ascii_case(question))
        .map(|q| q.ordinal)
}

/// Map keys are bare numbers in YAML and strings in JSON
fn resolve_key(key: &Value) -> Option<usize> {
    match key {
        Value::Number(n) =>
            n
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .and_then(questionnaire::question)
                .map(|q| q.ordinal),
        Value::String(s) => resolve_ordinal(s),
        _ => None,
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other).unwrap_or_default().trim().to_string(),
    }
}

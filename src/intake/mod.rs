use std::collections::BTreeMap;

use log::debug;

use crate::errors::AnswerError;
use crate::models::answer::ComplianceAnswerSet;
use crate::models::questionnaire::{ self, Question, QuestionKind };

pub mod answer_file;

pub use answer_file::{ load_answer_file, parse_answer_file, template_yaml };

/// What came of checking a submitted form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// Every question is answered; the set may be analysed
    Complete(ComplianceAnswerSet),
    /// Some questions are still empty
    Incomplete {
        answers: ComplianceAnswerSet,
        missing: usize,
    },
}

impl IntakeOutcome {
    pub fn missing(&self) -> usize {
        match self {
            IntakeOutcome::Complete(_) => 0,
            IntakeOutcome::Incomplete { missing, .. } => *missing,
        }
    }

    /// Warning shown when the form is not complete
    pub fn warning(&self) -> Option<String> {
        match self {
            IntakeOutcome::Complete(_) => None,
            IntakeOutcome::Incomplete { missing, .. } =>
                Some(
                    format!(
                        "Please fill in all {} remaining questions to generate a complete report.",
                        missing
                    )
                ),
        }
    }
}

/// Raw values typed into the form, keyed by question ordinal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    values: BTreeMap<usize, String>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the raw value for a question, replacing any earlier one
    pub fn set(&mut self, ordinal: usize, raw: impl Into<String>) -> Result<(), AnswerError> {
        if questionnaire::question(ordinal).is_none() {
            return Err(AnswerError::UnknownQuestion(ordinal));
        }
        self.values.insert(ordinal, raw.into());
        Ok(())
    }

    pub fn raw(&self, ordinal: usize) -> Option<&str> {
        self.values.get(&ordinal).map(String::as_str)
    }

    /// Builder-style variant of [`FormSubmission::set`]
    pub fn with(mut self, ordinal: usize, raw: impl Into<String>) -> Result<Self, AnswerError> {
        self.set(ordinal, raw)?;
        Ok(self)
    }

    /// Validate every value and gather the non-empty ones in questionnaire order
    pub fn collect(&self) -> Result<ComplianceAnswerSet, AnswerError> {
        let mut answers = ComplianceAnswerSet::new();
        for question in questionnaire::questionnaire() {
            let raw = self.raw(question.ordinal).unwrap_or("");
            if let Some(value) = normalize_answer(question, raw)? {
                answers.push(question.ordinal, value)?;
            }
        }
        Ok(answers)
    }

    /// Check the submission for completeness
    pub fn review(&self) -> Result<IntakeOutcome, AnswerError> {
        let answers = self.collect()?;
        let missing = answers.missing_count();
        debug!("Form has {} answers, {} missing", answers.len(), missing);

        if missing == 0 {
            Ok(IntakeOutcome::Complete(answers))
        } else {
            Ok(IntakeOutcome::Incomplete { answers, missing })
        }
    }
}

/// Check a raw value against the question's kind.
///
/// Returns `Ok(None)` for an empty (unanswered) value. Choice answers are
/// matched case-insensitively and returned in their canonical spelling.
/// Numeric answers are returned with two decimals.
pub fn normalize_answer(question: &Question, raw: &str) -> Result<Option<String>, AnswerError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }

    match question.kind {
        QuestionKind::Choice(options) =>
            options
                .iter()
                .find(|option| option.eq_ignore_ascii_case(value))
                .map(|option| Some(option.to_string()))
                .ok_or_else(|| AnswerError::UnknownOption {
                    ordinal: question.ordinal,
                    value: value.to_string(),
                    options: options
                        .iter()
                        .map(|o| o.to_string())
                        .collect(),
                }),
        QuestionKind::Numeric => {
            let amount = parse_amount(question.ordinal, value)?;
            Ok(Some(format!("{:.2}", amount)))
        }
        QuestionKind::FreeText => Ok(Some(value.to_string())),
    }
}

/// Parse a non-negative amount. Thousands separators are accepted.
pub fn parse_amount(ordinal: usize, value: &str) -> Result<f64, AnswerError> {
    let cleaned: String = value
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    let amount: f64 = cleaned.trim().parse().map_err(|_| AnswerError::NotANumber {
        ordinal,
        value: value.to_string(),
    })?;

    if !amount.is_finite() {
        return Err(AnswerError::NotANumber { ordinal, value: value.to_string() });
    }
    if amount < 0.0 {
        return Err(AnswerError::NegativeNumber { ordinal, value: amount });
    }
    // -0 compares equal to 0 but would print with a sign
    Ok(amount + 0.0)
}

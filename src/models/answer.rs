use serde::{ Deserialize, Serialize };

use crate::errors::AnswerError;
use crate::models::questionnaire::{ self, Question };

/// A single answered question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(skip)]
    pub ordinal: usize,
    /// Full question text, numbered
    pub question: String,
    pub answer: String,
}

impl Answer {
    pub fn new(question: &Question, answer: impl Into<String>) -> Self {
        Self {
            ordinal: question.ordinal,
            question: question.label(),
            answer: answer.into(),
        }
    }
}

/// The answers collected from one form submission.
///
/// Each answer refers to a distinct question of the fixed questionnaire.
/// Answers keep the order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ComplianceAnswerSet {
    answers: Vec<Answer>,
}

impl ComplianceAnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an answer for the question with the given ordinal
    pub fn push(&mut self, ordinal: usize, value: impl Into<String>) -> Result<(), AnswerError> {
        let question = questionnaire::question(ordinal).ok_or(AnswerError::UnknownQuestion(ordinal))?;
        if self.contains(ordinal) {
            return Err(AnswerError::DuplicateAnswer(ordinal));
        }
        self.answers.push(Answer::new(question, value));
        Ok(())
    }

    pub fn contains(&self, ordinal: usize) -> bool {
        self.answers.iter().any(|a| a.ordinal == ordinal)
    }

    pub fn get(&self, ordinal: usize) -> Option<&Answer> {
        self.answers.iter().find(|a| a.ordinal == ordinal)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Number of questions that still have no answer
    pub fn missing_count(&self) -> usize {
        questionnaire::question_count().saturating_sub(self.answers.len())
    }

    /// True when every question of the questionnaire has an answer
    pub fn is_complete(&self) -> bool {
        self.missing_count() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter()
    }
}

use serde::Serialize;

/// Options for the Yes / No questions
pub const YES_NO: &[&str] = &["Yes", "No"];

/// Options for the Yes / No / Not Sure questions
pub const YES_NO_NOT_SURE: &[&str] = &["Yes", "No", "Not Sure"];

/// Company types offered for the first question
pub const COMPANY_TYPES: &[&str] = &[
    "Private",
    "Public",
    "Listed",
    "Unlisted",
    "Government",
    "OPC",
    "Section 8",
    "Dormant",
    "Small",
];

/// How a question is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "options", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Pick one of a fixed set of options, or leave it empty
    Choice(&'static [&'static str]),
    /// A non-negative amount in ₹ Crores, kept to two decimals
    Numeric,
    /// Anything the user types
    FreeText,
}

/// One item of the intake questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// 1-based position in the questionnaire
    pub ordinal: usize,
    pub prompt: &'static str,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    const fn new(ordinal: usize, prompt: &'static str, kind: QuestionKind) -> Self {
        Self { ordinal, prompt, kind }
    }

    /// The options offered for a choice question, empty sentinel first
    pub fn choices(&self) -> Option<Vec<&'static str>> {
        match self.kind {
            QuestionKind::Choice(options) => {
                let mut choices = Vec::with_capacity(options.len() + 1);
                choices.push("");
                choices.extend_from_slice(options);
                Some(choices)
            }
            _ => None,
        }
    }

    /// Full question text as it is shown to the user and sent to the agent
    pub fn label(&self) -> String {
        format!("{}. {}", self.ordinal, self.prompt)
    }
}

use self::QuestionKind::{ Choice, FreeText, Numeric };

/// The fixed intake questionnaire, in order
pub static QUESTIONS: [Question; 16] = [
    Question::new(
        1,
        "What is the type of your company? (Private / Public / Listed / Unlisted / Government / OPC / Section 8 / Dormant / Small)",
        Choice(COMPANY_TYPES)
    ),
    Question::new(2, "Is your company listed on a stock exchange? (Yes / No)", Choice(YES_NO)),
    Question::new(
        3,
        "Is your company a Small Company under the Companies Act? (Yes / No / Not Sure)",
        Choice(YES_NO_NOT_SURE)
    ),
    Question::new(4, "Is your company a One Person Company (OPC)? (Yes / No)", Choice(YES_NO)),
    Question::new(
        5,
        "Is your company a Section 8 (Not-for-profit) Company? (Yes / No)",
        Choice(YES_NO)
    ),
    Question::new(
        6,
        "Is your company a Holding or Subsidiary of another company? (Yes / No)",
        Choice(YES_NO)
    ),
    Question::new(7, "What is your company's Paid-up Share Capital? (in ₹ Crores)", Numeric),
    Question::new(8, "What is your company's Turnover? (in ₹ Crores)", Numeric),
    Question::new(
        9,
        "What is your company's Net Profit (Profit Before Tax)? (in ₹ Crores)",
        Numeric
    ),
    Question::new(
        10,
        "What is the total amount of your borrowings from banks or public financial institutions? (in ₹ Crores)",
        Numeric
    ),
    Question::new(11, "Do you have any public deposits outstanding? (Yes / No)", Choice(YES_NO)),
    Question::new(
        12,
        "Are there any debentures issued and outstanding? (Yes / No)",
        Choice(YES_NO)
    ),
    Question::new(
        13,
        "How many shareholders / debenture holders / other security holders does your company have?",
        FreeText
    ),
    Question::new(
        14,
        "Do you already maintain e-form records electronically under section 120? (Yes / No)",
        Choice(YES_NO)
    ),
    Question::new(
        15,
        "Does your company already file financials in XBRL format? (Yes / No / Not Sure)",
        Choice(YES_NO_NOT_SURE)
    ),
    Question::new(16, "What is the total number of employees in your company?", FreeText),
];

/// All questions in order
pub fn questionnaire() -> &'static [Question] {
    &QUESTIONS
}

/// Look up a question by its 1-based ordinal
pub fn question(ordinal: usize) -> Option<&'static Question> {
    ordinal.checked_sub(1).and_then(|i| QUESTIONS.get(i))
}

pub fn question_count() -> usize {
    QUESTIONS.len()
}

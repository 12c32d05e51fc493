use thiserror::Error;

/// Error types for the compliance bot
#[derive(Debug, Error)]
pub enum ComplianceError {
    #[error("Missing required API key: {0}")]
    MissingCredential(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("HTTP error from {service}: {status} - {message}")]
    HttpError {
        service: String,
        status: u16,
        message: String,
    },

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("Search tool error: {0}")]
    SearchError(String),

    #[error("Invalid answer: {0}")]
    InvalidAnswer(#[from] AnswerError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),

    #[error(transparent)]
    YamlError(#[from] serde_yaml::Error),
}

/// Problems with a single answer given on the form
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnswerError {
    #[error("Question {ordinal}: '{value}' is not one of {options:?}")]
    UnknownOption {
        ordinal: usize,
        value: String,
        options: Vec<String>,
    },

    #[error("Question {ordinal}: value must be zero or greater, got {value}")]
    NegativeNumber { ordinal: usize, value: f64 },

    #[error("Question {ordinal}: '{value}' is not a number")]
    NotANumber { ordinal: usize, value: String },

    #[error("There is no question number {0}")]
    UnknownQuestion(usize),

    #[error("Question {0} was answered more than once")]
    DuplicateAnswer(usize),
}

/// Result type for compliance bot operations
pub type ComplianceResult<T> = Result<T, ComplianceError>;


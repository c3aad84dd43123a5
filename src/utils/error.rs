use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Deck service responded with {status}: {message}")]
    DeckServiceError { status: u16, message: String },

    #[error("Unknown card value: {value}")]
    UnknownCardValue { value: String },

    #[error("Cannot {action} while the game is {phase}")]
    InvalidAction { action: String, phase: String },

    #[error("No shuffled deck on the table")]
    NoDeck,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Game,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GameError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GameError::ApiError(_) | GameError::DeckServiceError { .. } => ErrorCategory::Network,
            GameError::UnknownCardValue { .. } | GameError::SerializationError(_) => {
                ErrorCategory::Data
            }
            GameError::InvalidAction { .. } | GameError::NoDeck => ErrorCategory::Game,
            GameError::ConfigError { .. }
            | GameError::ConfigValidationError { .. }
            | GameError::InvalidConfigValueError { .. }
            | GameError::MissingConfigError { .. } => ErrorCategory::Configuration,
            GameError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Game => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Short message meant for the person at the table rather than the logs.
    pub fn user_friendly_message(&self) -> String {
        match self {
            GameError::ApiError(e) if e.is_timeout() => {
                "The deck service took too long to answer".to_string()
            }
            GameError::ApiError(_) => "Could not reach the deck service".to_string(),
            GameError::DeckServiceError { status, message } => {
                format!("The deck service rejected the request ({status} {message})")
            }
            GameError::UnknownCardValue { value } => {
                format!("The deck service dealt a card we cannot score: {value}")
            }
            GameError::InvalidAction { action, phase } => {
                format!("You cannot {action} right now, the game is {phase}")
            }
            GameError::NoDeck => "There is no deck on the table yet, start a new game".to_string(),
            GameError::IoError(e) => format!("Terminal I/O failed: {e}"),
            GameError::SerializationError(e) => format!("Could not encode the round summary: {e}"),
            GameError::ConfigError { message } => format!("Configuration problem: {message}"),
            GameError::ConfigValidationError { field, message } => {
                format!("Configuration field '{field}' is invalid: {message}")
            }
            GameError::InvalidConfigValueError { field, value, reason } => {
                format!("'{value}' is not a valid {field}: {reason}")
            }
            GameError::MissingConfigError { field } => {
                format!("Configuration field '{field}' is required")
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your connection or the --api-base-url value, then start a new game",
            ErrorCategory::Data => "The deck service returned unexpected data; start a new game",
            ErrorCategory::Game => "Type 'help' to see which actions are available",
            ErrorCategory::Configuration => "Fix the configuration file or command line flags and run again",
            ErrorCategory::System => "Check that stdin/stdout are available and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

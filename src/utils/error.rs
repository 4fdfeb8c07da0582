use thiserror::Error;

#[derive(Error, Debug)]
pub enum FireError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API rejected the request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed API response: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No API key configured")]
    MissingApiKey,

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid selection: '{input}'")]
    InvalidSelection { input: String, max: usize },

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Provider,
    UserInput,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FireError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FireError::Http(_) => ErrorCategory::Network,
            FireError::Api { .. } | FireError::Serialization(_) => ErrorCategory::Provider,
            FireError::MissingApiKey
            | FireError::Config { .. }
            | FireError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            FireError::InvalidSelection { .. } => ErrorCategory::UserInput,
            FireError::Prompt(_) | FireError::Io(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::UserInput => ErrorSeverity::Medium,
            ErrorCategory::Internal => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FireError::Http(e) => format!("Could not reach the 24fire API: {}", e),
            FireError::Api { status, message } => {
                format!("The 24fire API rejected the request ({}): {}", status, message)
            }
            FireError::Serialization(_) => {
                "The 24fire API returned a response this tool could not understand".to_string()
            }
            FireError::MissingApiKey => "No API key configured".to_string(),
            FireError::Config { message } => format!("Configuration problem: {}", message),
            FireError::InvalidConfigValue { field, value, reason } => {
                format!("Invalid configuration value for '{}': {} ({})", field, value, reason)
            }
            FireError::InvalidSelection { .. } => {
                "Invalid selection. Please enter a valid number.".to_string()
            }
            FireError::Prompt(e) => format!("Could not read terminal input: {}", e),
            FireError::Io(e) => format!("Terminal output failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FireError::Http(_) => {
                "Check your network connection and the API base URL".to_string()
            }
            FireError::Api { status, .. } if *status == 401 || *status == 403 => {
                "Verify that the API key is valid and has access to this account".to_string()
            }
            FireError::Api { .. } => {
                "Verify that the service still exists in your 24fire account".to_string()
            }
            FireError::Serialization(_) => {
                "Re-run with --verbose to inspect the response, the API format may have changed"
                    .to_string()
            }
            FireError::MissingApiKey => {
                "Set the FIRE_API_KEY environment variable or add 'key' to fire.toml".to_string()
            }
            FireError::Config { .. } | FireError::InvalidConfigValue { .. } => {
                "Fix the value in the CLI flags or in fire.toml".to_string()
            }
            FireError::InvalidSelection { max, .. } => {
                format!("Enter a number between 1 and {}", max)
            }
            FireError::Prompt(_) | FireError::Io(_) => {
                "Run fire-cli from an interactive terminal".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FireError>;

use thiserror::Error;
use crate::enums::ai_provider_error::AiProviderError;

/// The model-facing operation an error belongs to. Used to pick the
/// generic message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Analysis,
    FixGeneration,
    Chat,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Analysis => "analysis",
            Self::FixGeneration => "fix generation",
            Self::Chat => "chat",
        }
    }

    fn failure_message(&self) -> &'static str {
        match self {
            Self::Analysis => "Failed to get analysis from the AI. The model may be unable to process the request.",
            Self::FixGeneration => "Failed to generate fixes from the AI. The model may be unable to process the request.",
            Self::Chat => "An error occurred while chatting with the AI.",
        }
    }
}

#[derive(Debug, Error)]
pub enum ForensicError {
    // Caller supplied unusable input, no model call was made
    #[error("Validation error for '{field}': {constraint}")]
    Validation {
        field: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // Model answered, but not with something we can use
    #[error("{}", .operation.failure_message())]
    ModelResponse {
        operation: Operation,
        reason: String,
    },

    // Model could not be reached or refused the request
    #[error("{}", .operation.failure_message())]
    Transport {
        operation: Operation,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },

    #[error("Archive error during {operation}: {reason}")]
    Archive {
        operation: String,
        reason: String,
    },

    #[error("File operation '{operation}' failed for '{file_path}': {reason}")]
    FileOperation {
        file_path: String,
        operation: String,
        reason: String,
    },
}

impl ForensicError {
    pub fn validation_error(field: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::Validation {
            field: field.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn model_response_error(operation: Operation, reason: &str) -> Self {
        Self::ModelResponse {
            operation,
            reason: reason.to_string(),
        }
    }

    pub fn transport_error(operation: Operation, reason: &str) -> Self {
        Self::Transport {
            operation,
            reason: reason.to_string(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::Config {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn archive_error(operation: &str, reason: &str) -> Self {
        Self::Archive {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperation {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Maps a provider failure for `operation`. The raw provider message is
    /// logged here and not carried into the returned error.
    pub fn from_provider(operation: Operation, error: AiProviderError) -> Self {
        log::error!("Error calling Gemini API during {}: {}", operation.name(), error);
        match error {
            AiProviderError::SerializationError(_) => {
                Self::model_response_error(operation, "the model returned an unreadable response")
            }
            AiProviderError::AuthenticationError(_) => {
                Self::transport_error(operation, "the model service rejected the credentials")
            }
            AiProviderError::ApiError(_) | AiProviderError::NetworkError(_) => {
                Self::transport_error(operation, "the model service could not complete the request")
            }
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Validation { .. } => true,
            Self::ModelResponse { .. } => true,
            Self::Transport { .. } => true,
            Self::Config { .. } => true,
            Self::Archive { .. } => false,
            Self::FileOperation { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::FileOperation { .. } => ErrorSeverity::High,
            Self::Archive { .. } => ErrorSeverity::High,
            Self::ModelResponse { .. } => ErrorSeverity::Medium,
            Self::Transport { .. } => ErrorSeverity::Medium,
            Self::Config { .. } => ErrorSeverity::Medium,
            Self::Validation { .. } => ErrorSeverity::Low,
        }
    }

    /// Message safe to show to the user. Provider detail carried in
    /// `reason` of model-facing errors is intentionally left out.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { suggestion, .. } | Self::Config { suggestion, .. } => {
                let mut msg = self.to_string();
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ModelResponse { .. } | Self::Transport { .. } => {
                format!("{}\n💡 You can retry the operation", self)
            }
            Self::Archive { .. } => {
                format!("{}\n💡 Check that the file is a valid zip archive", self)
            }
            Self::FileOperation { .. } => {
                format!("{}\n💡 Check file permissions and path", self)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for forensic operations
pub type ForensicResult<T> = Result<T, ForensicError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log the full details and print the user-facing message
    pub fn handle_error(error: &ForensicError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for ForensicError {
    fn from(error: std::io::Error) -> Self {
        ForensicError::FileOperation {
            file_path: String::new(),
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for ForensicError {
    fn from(error: toml::de::Error) -> Self {
        ForensicError::Config {
            message: format!("invalid TOML: {}", error.message()),
            field: None,
            suggestion: Some("Check the syntax of your config file".to_string()),
        }
    }
}

impl From<zip::result::ZipError> for ForensicError {
    fn from(error: zip::result::ZipError) -> Self {
        ForensicError::Archive {
            operation: "zip processing".to_string(),
            reason: error.to_string(),
        }
    }
}

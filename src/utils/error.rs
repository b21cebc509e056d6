use thiserror::Error;

#[derive(Error, Debug)]
pub enum GpaError {
    #[error("Invalid {field} format: '{value}'")]
    Format { field: String, value: String },

    #[error("{field} out of range: {value} ({reason})")]
    Range {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Student name cannot be empty or whitespace-only")]
    EmptyName,

    #[error("No grades or credits were provided")]
    EmptyInput,

    #[error("Grade count ({grades}) does not match credit count ({credits})")]
    LengthMismatch { grades: usize, credits: usize },

    #[error("Total credits must not be zero")]
    DivisionByZero,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    Config { field: String, message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Prompt failed: {message}")]
    Prompt { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Calculation,
    Storage,
    Output,
    Configuration,
    Interaction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GpaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GpaError::Format { .. } | GpaError::Range { .. } | GpaError::EmptyName => {
                ErrorCategory::Input
            }
            GpaError::EmptyInput
            | GpaError::LengthMismatch { .. }
            | GpaError::DivisionByZero => ErrorCategory::Calculation,
            GpaError::Io(_) => ErrorCategory::Storage,
            GpaError::Serialization(_) => ErrorCategory::Output,
            GpaError::Config { .. } | GpaError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            GpaError::Prompt { .. } => ErrorCategory::Interaction,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 使用者可重新輸入
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Interaction => ErrorSeverity::Medium,
            ErrorCategory::Calculation | ErrorCategory::Output | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// True for failures the interactive shell answers with a re-prompt.
    pub fn is_retryable(&self) -> bool {
        matches!(self.category(), ErrorCategory::Input) || matches!(self, GpaError::EmptyInput)
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GpaError::Format { field, .. } if field == "grade" => {
                "Invalid grade format. Please enter a number.".to_string()
            }
            GpaError::Format { field, .. } if field == "credit" => {
                "Invalid credit format. Please enter a whole number.".to_string()
            }
            GpaError::Range { reason, .. } => reason.clone(),
            GpaError::EmptyInput => "At least one course must be entered.".to_string(),
            GpaError::Io(e) => format!("Could not access the file system: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GpaError::Format { .. } => "Check the value for typos and enter it again",
            GpaError::Range { .. } => {
                "Grades must be between 0.0 and 4.0; credits must be positive"
            }
            GpaError::EmptyName => "Enter a non-blank student name",
            GpaError::EmptyInput => "Enter at least one grade and credit before finishing",
            GpaError::LengthMismatch { .. } => "Supply exactly one credit value per grade",
            GpaError::DivisionByZero => "Make sure at least one course has non-zero credits",
            GpaError::Io(_) => "Check that the output directory is writable",
            GpaError::Serialization(_) => "Retry without --json to get the plain text summary",
            GpaError::Config { .. } | GpaError::InvalidConfigValue { .. } => {
                "Fix the configuration file or command-line flags"
            }
            GpaError::Prompt { .. } => "Run the program again from an interactive terminal",
        }
    }
}

pub type Result<T> = std::result::Result<T, GpaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_retryable() {
        let err = GpaError::Format {
            field: "grade".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.is_retryable());
        assert!(GpaError::EmptyInput.is_retryable());
        assert!(!GpaError::DivisionByZero.is_retryable());
    }

    #[test]
    fn test_user_friendly_message() {
        let err = GpaError::Format {
            field: "credit".to_string(),
            value: "2.5".to_string(),
        };
        assert_eq!(
            err.user_friendly_message(),
            "Invalid credit format. Please enter a whole number."
        );

        let io = GpaError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(io.category(), ErrorCategory::Storage);
        assert!(io.user_friendly_message().contains("denied"));
    }

    #[test]
    fn test_serialization_error_is_not_a_config_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = GpaError::from(json_err);
        assert!(matches!(err, GpaError::Serialization(_)));
        assert_eq!(err.category(), ErrorCategory::Output);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("--json"));
    }
}

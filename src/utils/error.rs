use thiserror::Error;

#[derive(Error, Debug)]
pub enum LucasError {
    #[error("Invalid term count: {value} (N must be a positive integer)")]
    InvalidCount { value: i64 },

    #[error("Lucas number at index {index} does not fit in a 64-bit signed integer")]
    Overflow { index: u32 },

    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
    Configuration,
    Io,
}

impl LucasError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LucasError::InvalidCount { .. } | LucasError::InvalidInput { .. } => {
                ErrorCategory::Input
            }
            LucasError::Overflow { .. } => ErrorCategory::Arithmetic,
            LucasError::ConfigError { .. } | LucasError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            LucasError::IoError(_) | LucasError::CsvError(_) | LucasError::SerializationError(_) => {
                ErrorCategory::Io
            }
        }
    }

    /// 依錯誤類別決定程式結束碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => 1,
            ErrorCategory::Arithmetic => 2,
            ErrorCategory::Io => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LucasError::InvalidCount { .. } => "N must be positive integer.".to_string(),
            LucasError::InvalidInput { input, .. } => {
                format!("'{}' is not an integer.", input)
            }
            LucasError::Overflow { index } => format!(
                "Lucas number at index {} is too large to represent.",
                index
            ),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Input => "Enter a whole number greater than zero".to_string(),
            ErrorCategory::Arithmetic => format!(
                "Request at most {} terms",
                crate::core::lucas::MAX_INDEX
            ),
            ErrorCategory::Configuration => {
                "Check the configuration file and command-line flags".to_string()
            }
            ErrorCategory::Io => "Check that the output path exists and is writable".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LucasError>;

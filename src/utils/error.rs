use thiserror::Error;

#[derive(Error, Debug)]
pub enum PropertyError {
    #[error("Cannot query the value of {property} because it has no value available")]
    NoValue { property: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

impl PropertyError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PropertyError::NoValue { property } => {
                format!("{} was read before a value or convention was set", property)
            }
            PropertyError::IoError(e) => format!("Could not read the scenario file: {}", e),
            PropertyError::SerializationError(e) => format!("Could not render the report: {}", e),
            PropertyError::ConfigError { message } => format!("Invalid scenario file: {}", message),
            PropertyError::ConfigValidationError { field, message } => {
                format!("Invalid value for '{}': {}", field, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PropertyError::NoValue { .. } => {
                "Add a `convention` or `set` step before the first `print` step"
            }
            PropertyError::IoError(_) => "Check that the --config path exists and is readable",
            PropertyError::SerializationError(_) => "Retry with --format text",
            PropertyError::ConfigError { .. } | PropertyError::ConfigValidationError { .. } => {
                "Fix the scenario TOML and run again"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            PropertyError::NoValue { .. } => 1,
            PropertyError::ConfigError { .. } | PropertyError::ConfigValidationError { .. } => 2,
            PropertyError::IoError(_) | PropertyError::SerializationError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PropertyError>;

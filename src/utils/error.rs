use thiserror::Error;

/// 網路或解析失敗時顯示給使用者的通用訊息
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed. Check your connection and try again.";

#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("HTTP request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Authentication failed: {message}")]
    AuthenticationError { message: String },

    #[error("Plan restriction on {feature}: {message}")]
    PlanRestrictedError { feature: String, message: String },

    #[error("API Error: {status} - {message}")]
    ApiStatusError { status: u16, message: String },

    #[error("Malformed response: {message}")]
    MalformedResponseError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Authentication,
    PlanRestriction,
    Network,
    Configuration,
}

impl ErrorCategory {
    /// 單次指令的結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Validation => 2,
            ErrorCategory::Authentication | ErrorCategory::PlanRestriction => 3,
            ErrorCategory::Network => 4,
        }
    }
}

impl EnrichError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        EnrichError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EnrichError::ValidationError { .. } => ErrorCategory::Validation,
            EnrichError::AuthenticationError { .. } => ErrorCategory::Authentication,
            EnrichError::PlanRestrictedError { .. } => ErrorCategory::PlanRestriction,
            EnrichError::ConfigError { .. }
            | EnrichError::InvalidConfigValueError { .. }
            | EnrichError::IoError(_) => ErrorCategory::Configuration,
            EnrichError::NetworkError(_)
            | EnrichError::SerializationError(_)
            | EnrichError::ApiStatusError { .. }
            | EnrichError::MalformedResponseError { .. } => ErrorCategory::Network,
        }
    }

    /// 顯示在結果區的單行訊息，不含任何部分資料
    pub fn user_friendly_message(&self) -> String {
        match self {
            EnrichError::ValidationError { message, .. } => format!("Error: {}", message),
            EnrichError::AuthenticationError { message } => {
                format!("Authentication failed: {}", message)
            }
            EnrichError::PlanRestrictedError { feature, message } => format!(
                "{} requires a paid Apollo plan. Provider said: {}",
                capitalize(feature),
                message
            ),
            EnrichError::ApiStatusError { status, message } => {
                format!("API Error: {} - {}", status, message)
            }
            EnrichError::NetworkError(_)
            | EnrichError::SerializationError(_)
            | EnrichError::MalformedResponseError { .. } => GENERIC_FAILURE_MESSAGE.to_string(),
            EnrichError::ConfigError { .. }
            | EnrichError::InvalidConfigValueError { .. }
            | EnrichError::IoError(_) => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Fill in the required fields using the expected format",
            ErrorCategory::Authentication => "Check that your Apollo API key is correct and active",
            ErrorCategory::PlanRestriction => {
                "Upgrade your Apollo plan or use company/contact enrichment instead"
            }
            ErrorCategory::Network => "Check your internet connection and try again in a few moments",
            ErrorCategory::Configuration => "Review the configuration file and command-line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, EnrichError>;

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

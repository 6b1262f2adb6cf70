use thiserror::Error;

#[derive(Error, Debug)]
pub enum BadgerError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("Unexpected response body from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unrecognized command '{input}': {reason}")]
    InvalidCommand { input: String, reason: String },
}

impl BadgerError {
    /// 是否為抓取失敗（網路錯誤、非 2xx 回應或無法解析的內容）
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            BadgerError::Http(_) | BadgerError::Status { .. } | BadgerError::Decode { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BadgerError::Http(_) => "Could not reach the course API".to_string(),
            BadgerError::Status { status, .. } => {
                format!("The course API rejected the request (HTTP {})", status)
            }
            BadgerError::Decode { .. } => "The course API sent data in an unexpected shape".to_string(),
            BadgerError::Io(e) => format!("File access failed: {}", e),
            BadgerError::ConfigError { message } => format!("Configuration problem: {}", message),
            BadgerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            BadgerError::MissingConfigError { field } => format!("Setting '{}' is required", field),
            BadgerError::InvalidCommand { input, reason } => format!("'{}': {}", input, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BadgerError::Http(_) => "Check your network connection and the API base URL",
            BadgerError::Status { status: 401 | 403, .. } => {
                "Check that your badger id (CS571_ID) is correct"
            }
            BadgerError::Status { .. } => "Check the endpoint paths in your configuration",
            BadgerError::Decode { .. } => "Make sure the endpoint points at the expected dataset",
            BadgerError::Io(_) => "Make sure the file exists and is readable",
            BadgerError::ConfigError { .. }
            | BadgerError::InvalidConfigValueError { .. }
            | BadgerError::MissingConfigError { .. } => {
                "Fix the configuration file or command-line flags and try again"
            }
            BadgerError::InvalidCommand { .. } => {
                "Use `+ <n>`, `- <n>` or `hover +|- <n> on|off`"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BadgerError>;

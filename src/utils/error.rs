use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Backend authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Backend RPC fault (code {code}): {message}")]
    RpcFault { code: i64, message: String },

    #[error("Unexpected response from {endpoint}: {message}")]
    UnexpectedResponse { endpoint: String, message: String },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Authentication,
    Transport,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SyncError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SyncError::MissingConfig { .. } | SyncError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            SyncError::AuthenticationFailed { .. } => ErrorCategory::Authentication,
            SyncError::ApiError(_) | SyncError::RpcFault { .. } => ErrorCategory::Transport,
            SyncError::SerializationError(_) | SyncError::UnexpectedResponse { .. } => {
                ErrorCategory::Data
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Critical,
            ErrorCategory::Authentication => ErrorSeverity::High,
            ErrorCategory::Transport | ErrorCategory::Data => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SyncError::MissingConfig { field } => {
                format!("Required environment variable {} is not set", field)
            }
            SyncError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration value {} is invalid: {}", field, reason)
            }
            SyncError::AuthenticationFailed { .. } => {
                "The backend rejected the provided credentials".to_string()
            }
            SyncError::ApiError(e) => format!("A network request failed: {}", e),
            SyncError::RpcFault { message, .. } => {
                format!("The backend reported an error: {}", message)
            }
            SyncError::SerializationError(e) => format!("A response could not be decoded: {}", e),
            SyncError::UnexpectedResponse { endpoint, message } => {
                format!("{} returned an unexpected response: {}", endpoint, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the ODOO_* and GOHIGHLEVEL_* environment variables"
            }
            ErrorCategory::Authentication => {
                "Verify ODOO_DB, ODOO_USERNAME and ODOO_PASSWORD against the backend"
            }
            ErrorCategory::Transport => "Check network connectivity and retry the run",
            ErrorCategory::Data => "Inspect the remote API response format; it may have changed",
        }
    }
}

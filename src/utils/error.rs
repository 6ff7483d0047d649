use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArmError {
    #[error("building request for {operation}: {message}")]
    RequestError { operation: String, message: String },

    #[error("invalid url: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("executing request: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("{operation}: unexpected status {status} with error: {}: {message}", .code.as_deref().unwrap_or("Unknown"))]
    UnexpectedStatus {
        operation: String,
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("parsing {id_type} ID {input:?}: the segment '{segment}' was not specified")]
    SegmentNotSpecified {
        id_type: String,
        segment: String,
        input: String,
    },

    #[error("parsing {id_type} ID {input:?}: {reason}")]
    InvalidResourceId {
        id_type: String,
        input: String,
        reason: String,
    },

    #[error("polling {operation}: the operation finished with status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    PollingFailed {
        operation: String,
        status: String,
        message: Option<String>,
    },

    #[error("polling {operation}: timed out after {elapsed:?}")]
    PollingTimeout { operation: String, elapsed: Duration },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error for '{field}': {message}")]
    ValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    Transport,
    Response,
    ResourceId,
    Polling,
    Configuration,
    Data,
}

impl ArmError {
    /// HTTP status of the failing response, if the error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ArmError::UnexpectedStatus { status, .. } => Some(*status),
            ArmError::TransportError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ArmError::RequestError { .. } | ArmError::UrlError(_) => ErrorCategory::Request,
            ArmError::TransportError(_) | ArmError::IoError(_) => ErrorCategory::Transport,
            ArmError::UnexpectedStatus { .. } => ErrorCategory::Response,
            ArmError::SegmentNotSpecified { .. } | ArmError::InvalidResourceId { .. } => {
                ErrorCategory::ResourceId
            }
            ArmError::PollingFailed { .. } | ArmError::PollingTimeout { .. } => {
                ErrorCategory::Polling
            }
            ArmError::ConfigError { .. }
            | ArmError::InvalidConfigValueError { .. }
            | ArmError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ArmError::SerializationError(_) | ArmError::ValidationError { .. } => {
                ErrorCategory::Data
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ArmError>;

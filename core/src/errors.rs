use thiserror::Error;

/// Query backend errors
///
/// Every non-success outcome of a backend exchange is normalized into one
/// of these variants at the gateway boundary; nothing else escapes it.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The query text was empty after trimming; never reaches the network.
    #[error("a question must be supplied")]
    Validation,

    /// Network-level failure (connection refused, timeout, DNS). No HTTP
    /// status is available.
    #[error("Transport Error: {0}")]
    Transport(String),

    /// Non-2xx HTTP status, with the backend's `detail` field when the
    /// failure body parsed as JSON.
    #[error("HTTP Error: status {status} - {}", .detail.as_deref().unwrap_or("no detail"))]
    Protocol { status: u16, detail: Option<String> },

    /// 2xx status but the body did not match the expected success shape.
    #[error("Decode Error: {0}")]
    Decode(String),

    /// Unreadable or malformed configuration.
    #[error("Configuration Error: {0}")]
    Config(String),
}

impl BackendError {
    /// The backend-supplied detail, when one was extracted.
    pub fn detail(&self) -> Option<&str> {
        match self {
            BackendError::Protocol { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// The HTTP status of the failed exchange, when one was received.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            BackendError::Protocol { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// One-line description suitable for showing to the user: the
    /// backend's detail when present, otherwise the HTTP status,
    /// otherwise the underlying error text.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Protocol {
                detail: Some(detail),
                ..
            } => detail.clone(),
            BackendError::Protocol {
                status,
                detail: None,
            } => format!("HTTP status {status}"),
            other => other.to_string(),
        }
    }
}

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

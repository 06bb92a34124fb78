// API client error types
use serde_json::Value;
use thiserror::Error;

/// Everything that can go wrong between a container command and the job portal API.
///
/// The variants only exist for logging and tests. Containers flatten every
/// variant into its display message; nothing downstream branches on the kind.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, DNS failure, TLS error, ...
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response. `message` comes from the `{message}` envelope when present.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// An authenticated request was attempted without a stored session token
    #[error("Not authorized, no session token")]
    NoSession,

    /// 2xx response whose body did not match the expected envelope
    #[error("{0}")]
    Decode(String),

    /// Rejected locally before any request was sent
    #[error("{0}")]
    InvalidInput(String),
}

impl ClientError {
    /// HTTP status for server-reported failures
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Client-facing message, the only thing containers keep
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Short code for JSON output
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Transport(_) => "TRANSPORT_ERROR",
            ClientError::Server { status: 401, .. } => "UNAUTHORIZED",
            ClientError::Server { status: 403, .. } => "FORBIDDEN",
            ClientError::Server { status: 404, .. } => "NOT_FOUND",
            ClientError::Server { .. } => "SERVER_ERROR",
            ClientError::NoSession => "NO_SESSION",
            ClientError::Decode(_) => "INVALID_RESPONSE",
            ClientError::InvalidInput(_) => "INVALID_INPUT",
        }
    }
}

impl ClientError {
    pub fn transport(message: impl Into<String>) -> Self {
        ClientError::Transport(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        ClientError::Decode(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        ClientError::InvalidInput(message.into())
    }

    /// Build a server failure from a status and whatever body came back.
    /// Prefers the envelope's `message`, falls back to a generic status line.
    pub fn from_status(status: u16, body: Option<&Value>) -> Self {
        let message = body
            .and_then(|b| b.get("message"))
            .and_then(|m| m.as_str())
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status code {}", status));

        ClientError::Server { status, message }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            tracing::warn!("response decode error: {}", err);
            ClientError::Decode(format!("Invalid response from server: {}", err))
        } else {
            tracing::warn!("transport error: {}", err);
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidInput(format!("Invalid API URL: {}", err))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(format!("Invalid response from server: {}", err))
    }
}

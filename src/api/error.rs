use thiserror::Error;

/// Every way an API call can fail
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server unreachable, connection reset, TLS failure and the like
    #[error("network error (is the API server reachable?): {0}")]
    Transport(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("expected a JSON response, got text: {0}")]
    UnexpectedText(String),

    #[error("invalid user id '{0}': expected a number")]
    InvalidId(String),
}

impl ApiError {
    /// Build the error for a non-2xx response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = if body.is_empty() {
            format!("HTTP error! status: {}", status)
        } else {
            body.to_string()
        };
        Self::Http { status, message }
    }

    /// HTTP status, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401))
    }
}

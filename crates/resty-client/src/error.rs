//! Error types for resty-client.

/// Result type alias for resty-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for resty-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns the HTTP status code if this is an `Http` error.
    pub fn http_status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if this is a transport-level failure.
    pub fn is_network(&self) -> bool {
        matches!(self.kind, ErrorKind::Network(_))
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The service answered with an unacceptable status. The body is carried
    /// verbatim for diagnostic display.
    #[error("HTTP error: {status} {body}")]
    Http { status: u16, body: String },

    /// Response body was not valid JSON.
    #[error("Failed to parse response as JSON: {0}")]
    Decode(String),

    /// Transport-level failure (connect, TLS, mid-body disconnect).
    #[error("Request failed: {0}")]
    Network(String),

    /// Method name outside GET/POST/PATCH/DELETE.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Status errors never originate here: the client hands any status
        // back to the caller. Everything reqwest reports is transport-level.
        let kind = if err.is_decode() {
            ErrorKind::Decode(err.to_string())
        } else {
            ErrorKind::Network(err.to_string())
        };
        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Decode(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}

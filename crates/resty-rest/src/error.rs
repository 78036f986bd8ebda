//! Error types for resty-rest.

/// Result type alias for resty-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for resty-rest operations.
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

    /// Returns the HTTP status code if this is an `Http` error.
    pub fn http_status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The service answered with an unacceptable status for the verb.
    /// The raw body is carried for diagnostic display.
    #[error("HTTP error: {status} {body}")]
    Http { status: u16, body: String },

    /// Response body was not valid JSON.
    #[error("Failed to parse response as JSON: {0}")]
    Decode(String),

    /// Transport-level failure.
    #[error("Request failed: {0}")]
    Network(String),

    /// Method name outside GET/POST/PATCH/DELETE.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// Credential loading failed.
    #[error("Auth error: {0}")]
    Auth(String),

    /// CSV export failed.
    #[error("CSV error: {0}")]
    Csv(String),

    /// Other client-layer error (bad URL, configuration, ...).
    #[error("Client error: {0}")]
    Client(String),
}

impl From<resty_client::Error> for Error {
    fn from(err: resty_client::Error) -> Self {
        use resty_client::ErrorKind as ClientKind;
        let kind = match &err.kind {
            ClientKind::Http { status, body } => ErrorKind::Http {
                status: *status,
                body: body.clone(),
            },
            ClientKind::Decode(msg) => ErrorKind::Decode(msg.clone()),
            ClientKind::Network(msg) => ErrorKind::Network(msg.clone()),
            ClientKind::UnsupportedMethod(verb) => ErrorKind::UnsupportedMethod(verb.clone()),
            ClientKind::InvalidUrl(_) | ClientKind::Config(_) => {
                ErrorKind::Client(err.to_string())
            }
        };
        Error {
            kind,
            source: Some(Box::new(err)),
        }
    }
}

impl From<resty_auth::Error> for Error {
    fn from(err: resty_auth::Error) -> Self {
        Error {
            kind: ErrorKind::Auth(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::Decode(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error {
            kind: ErrorKind::Client(format!("Invalid URL: {err}")),
            source: Some(Box::new(err)),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error {
            kind: ErrorKind::Csv(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

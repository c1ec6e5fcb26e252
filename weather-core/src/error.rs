use thiserror::Error;

/// Failure of a proxy operation, as seen by the HTTP layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProxyError {
    /// A required request parameter was missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The upstream provider could not be reached or answered with a failure.
    #[error("{0}")]
    Upstream(String),
}

impl ProxyError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<anyhow::Error> for ProxyError {
    fn from(err: anyhow::Error) -> Self {
        // Alternate form joins the context chain on one line.
        Self::Upstream(format!("{err:#}"))
    }
}

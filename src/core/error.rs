use thiserror::Error;

/// Status code carried by every not-found failure.
pub const NOT_FOUND_STATUS: u16 = 404;

/// Failures produced by the record store.
///
/// Mirrors an unexpected-response error of a remote backend: a message plus an
/// HTTP-like status code. The store only ever reports missing data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// HTTP-like status code of the failure
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => NOT_FOUND_STATUS,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(message) => message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

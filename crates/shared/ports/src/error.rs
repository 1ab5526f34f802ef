use thiserror::Error;

/// Failures reported by a market data source
///
/// These are passed through the normalization layer untouched; retry and
/// backoff belong to the source itself.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Decoding failed: {0}")]
    Decode(String),

    #[error("Exchange error: {0}")]
    Exchange(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Decode(e.to_string())
    }
}

/// A field of a raw definition that is present but has the wrong shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unexpected value for field {field}")]
pub struct FieldError {
    /// Dotted path of the offending field, e.g. `limits.amount.min`
    pub field: String,
}

impl FieldError {
    pub fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
        }
    }
}

pub type SourceResult<T> = std::result::Result<T, SourceError>;

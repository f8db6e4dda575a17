use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Document {0} is not open")]
    UnknownDocument(String),
    #[error("Document {0} is already open")]
    AlreadyOpen(String),
    #[error("Invalid editor configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    #[error("Span {start}..{end} is outside of document {document}")]
    SpanOutOfBounds {
        document: String,
        start: usize,
        end: usize,
    },
}

impl ServiceError {
    /// Returns the type name of this error
    pub fn name(&self) -> &'static str {
        match self {
            ServiceError::UnknownDocument(_) => "UnknownDocument",
            ServiceError::AlreadyOpen(_) => "AlreadyOpen",
            ServiceError::InvalidConfig(_) => "InvalidConfig",
            ServiceError::SpanOutOfBounds { .. } => "SpanOutOfBounds",
        }
    }

    /// Returns the document this error applies to, if relevant.
    pub fn document(&self) -> Option<&str> {
        match self {
            ServiceError::UnknownDocument(document)
            | ServiceError::AlreadyOpen(document)
            | ServiceError::SpanOutOfBounds { document, .. } => Some(document),
            ServiceError::InvalidConfig(_) => None,
        }
    }
}

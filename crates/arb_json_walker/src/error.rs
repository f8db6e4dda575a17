use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonSyntaxError {
    #[error("Unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },
    #[error("Unexpected character {found:?} at offset {offset}, expected {expected}")]
    UnexpectedCharacter {
        found: char,
        expected: &'static str,
        offset: usize,
    },
    #[error("Comments are not permitted (found at offset {offset})")]
    CommentNotAllowed { offset: usize },
    #[error("String starting at offset {offset} is never terminated")]
    UnterminatedString { offset: usize },
    #[error("Invalid number at offset {offset}")]
    InvalidNumber { offset: usize },
    #[error("Values nested too deeply at offset {offset}")]
    NestingTooDeep { offset: usize },
}

impl JsonSyntaxError {
    /// Returns the byte offset in the source text where this error occurred.
    pub fn offset(&self) -> usize {
        match self {
            JsonSyntaxError::UnexpectedEof { offset }
            | JsonSyntaxError::UnexpectedCharacter { offset, .. }
            | JsonSyntaxError::CommentNotAllowed { offset }
            | JsonSyntaxError::UnterminatedString { offset }
            | JsonSyntaxError::InvalidNumber { offset }
            | JsonSyntaxError::NestingTooDeep { offset } => *offset,
        }
    }
}

pub type JsonSyntaxResult<T> = Result<T, JsonSyntaxError>;

use serde::Serialize;
use thiserror::Error;

/// Raised by the bracket matcher when an opening brace has no matching close, or a closing brace
/// appears with nothing open. Offsets are local to the text that was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unbalanced brackets between {start} and {end}")]
pub struct UnbalancedBrackets {
    pub start: usize,
    pub end: usize,
}

impl UnbalancedBrackets {
    /// Returns the same error with its offsets shifted by `offset`.
    pub fn offset_by(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

/// Failure to parse the structure of a message. Offsets are absolute within the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MessageSyntaxError {
    #[error(transparent)]
    Unbalanced(#[from] UnbalancedBrackets),
    #[error("Braces nested more than {max_depth} levels deep at offset {offset}")]
    NestingTooDeep { offset: usize, max_depth: usize },
}

/// A recoverable problem in the content of a message value, recorded while parsing instead of
/// aborting the whole document. The span always covers the entire message value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseError {
    pub message: String,
    pub start: usize,
    pub end: usize,
}

impl ParseError {
    pub fn new(message: impl ToString, start: usize, end: usize) -> Self {
        Self {
            message: message.to_string(),
            start,
            end,
        }
    }
}

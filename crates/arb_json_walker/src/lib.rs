mod error;
mod util;
mod walker;

pub use error::{JsonSyntaxError, JsonSyntaxResult};
pub use util::{json_escape_sequence, unescape_json_str};
pub use walker::{JsonValue, JsonVisitor, JsonWalker, MAX_NESTING_DEPTH};

/// Walk the given `text` as a single JSON document, calling into `visitor` for every structural
/// event along the way. Every event carries the byte offset of the token that produced it, which
/// is the primary reason for this implementation over existing libraries like serde that only
/// track that state internally.
///
/// Some assumptions are made here that a general-purpose parser wouldn't make:
/// - Comments are never allowed, and are reported as a syntax error.
/// - Trailing commas in objects and arrays are tolerated.
/// - String content is reported raw, exactly as it appears in the source, without unescaping.
///   Use [`unescape_json_str`] to decode it when the decoded value is needed.
///
/// Walking stops at the first syntax error. Any events emitted before the error are not
/// retracted, so visitors can still make use of a partial document.
pub fn walk<V: JsonVisitor>(text: &str, visitor: &mut V) -> JsonSyntaxResult<()> {
    JsonWalker::new(text).walk(visitor)
}

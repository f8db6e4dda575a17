pub use arb_json_walker::JsonSyntaxError;
pub use brackets::{
    find_top_level, match_brackets, BracketMatch, BracketMatchKind, ARB_ESCAPE_CHARACTER,
};
pub use error::{MessageSyntaxError, ParseError, UnbalancedBrackets};
pub use line_index::{LineColumn, LineIndex};
pub use model::{
    CombinedMessage, ComplexMessage, Key, Literal, Message, MessageEntry, MessageList, Metadata,
    MetadataEntry, NodeRef, PlaceholderMetadata, TextRange,
};
pub use parser::{
    parse, parse_with_options, MessageParser, ParseOptions, ParseOutcome, MAX_NESTING_DEPTH,
};
pub use visitor::{walk_message, MessageVisitor, TraversalControl};

mod arb_visitor;
mod brackets;
mod error;
mod line_index;
mod model;
mod parser;
mod visitor;

/// The ICU message types that ARB tooling understands.
pub static COMPLEX_MESSAGE_TYPES: [&str; 3] = ["plural", "select", "gender"];

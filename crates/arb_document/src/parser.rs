use arb_json_walker::JsonSyntaxError;
use serde::Serialize;

use crate::arb_visitor::ArbDocumentVisitor;
use crate::brackets::{find_top_level, match_brackets, BracketMatchKind, ARB_ESCAPE_CHARACTER};
use crate::error::{MessageSyntaxError, ParseError};
use crate::model::{CombinedMessage, ComplexMessage, Literal, Message, MessageList};

/// How many levels of braces a message may nest before it is rejected.
pub const MAX_NESTING_DEPTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// The character that makes the following character literal inside of messages.
    pub escape_character: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            escape_character: ARB_ESCAPE_CHARACTER,
        }
    }
}

/// Everything produced by a single parse of a document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutcome {
    pub messages: MessageList,
    /// Messages whose braces could not be matched. Each one spans the entire raw message value.
    pub errors: Vec<ParseError>,
    /// Set when the document itself is not valid JSON. The model then only contains the entries
    /// that were read before the error.
    #[serde(skip)]
    pub syntax_error: Option<JsonSyntaxError>,
}

/// Parse an entire ARB document into its message model.
pub fn parse(text: &str) -> ParseOutcome {
    parse_with_options(text, ParseOptions::default())
}

pub fn parse_with_options(text: &str, options: ParseOptions) -> ParseOutcome {
    let mut visitor = ArbDocumentVisitor::new(text, MessageParser::new(options));
    let syntax_error = arb_json_walker::walk(text, &mut visitor).err();
    if let Some(error) = &syntax_error {
        tracing::debug!("ARB document is not well-formed JSON: {error}");
    }

    let (messages, errors) = visitor.finish();
    tracing::trace!(
        messages = messages.messages.len(),
        metadata = messages.metadata.len(),
        errors = errors.len(),
        "parsed ARB document"
    );
    ParseOutcome {
        messages,
        errors,
        syntax_error,
    }
}

/// Recursive parser for ICU message strings. Every node it produces is positioned absolutely
/// within the document, using the `offset` of the first byte of each substring it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageParser {
    options: ParseOptions,
}

impl MessageParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse a complete top-level message value. Unbalanced or overly nested braces anywhere
    /// inside of it are converted to a [`ParseError`] covering the whole value.
    pub fn parse_value(&self, text: &str, offset: usize) -> Result<Message, ParseError> {
        self.parse_message(text, offset, false).map_err(|error| {
            tracing::debug!("invalid message structure: {error}");
            ParseError::new(error, offset, offset + text.len())
        })
    }

    pub fn parse_message(
        &self,
        text: &str,
        offset: usize,
        expect_placeholder: bool,
    ) -> Result<Message, MessageSyntaxError> {
        self.parse_nested(text, offset, expect_placeholder, 0)
    }

    fn parse_nested(
        &self,
        text: &str,
        offset: usize,
        expect_placeholder: bool,
        depth: usize,
    ) -> Result<Message, MessageSyntaxError> {
        if depth > MAX_NESTING_DEPTH {
            return Err(MessageSyntaxError::NestingTooDeep {
                offset,
                max_depth: MAX_NESTING_DEPTH,
            });
        }
        let escape = self.options.escape_character;
        let matches = match_brackets(text, escape).map_err(|error| error.offset_by(offset))?;
        if matches.is_empty() {
            let literal = Literal::new(text, offset, offset + text.len());
            return Ok(if expect_placeholder {
                Message::Placeholder(literal)
            } else {
                Message::Literal(literal)
            });
        }

        let mut parts = Vec::with_capacity(matches.len() / 2);
        for segment in matches {
            let segment_text = segment.text(text);
            let segment_offset = offset + segment.start;
            match segment.kind {
                BracketMatchKind::Outside => parts.push(Message::Literal(Literal::new(
                    segment_text,
                    segment_offset,
                    segment_offset + segment_text.len(),
                ))),
                BracketMatchKind::Content => {
                    let commas = find_top_level(segment_text, ',', escape);
                    let part = if commas.is_empty() {
                        self.parse_nested(segment_text, segment_offset, true, depth + 1)?
                    } else {
                        self.parse_complex(segment_text, segment_offset, &commas, depth + 1)?
                    };
                    parts.push(part);
                }
                BracketMatchKind::Open | BracketMatchKind::Close => {}
            }
        }

        if parts.len() == 1 {
            if let Some(single) = parts.pop() {
                return Ok(single);
            }
        }
        Ok(Message::Combined(CombinedMessage {
            parts,
            start: offset,
            end: offset + text.len(),
        }))
    }

    /// Parse the content of a `{argument, type, label{...} ...}` construct, given the offsets of
    /// its top-level commas.
    fn parse_complex(
        &self,
        text: &str,
        offset: usize,
        commas: &[usize],
        depth: usize,
    ) -> Result<Message, MessageSyntaxError> {
        let first = commas[0];
        let argument = Literal::trimmed(&text[..first], offset);
        let (complex_type, body_start) = match commas.get(1) {
            Some(&second) => (
                Literal::trimmed(&text[first + 1..second], offset + first + 1),
                second + 1,
            ),
            None => (
                Literal::trimmed(&text[first + 1..], offset + first + 1),
                text.len(),
            ),
        };

        let body = &text[body_start..];
        let body_offset = offset + body_start;
        let mut messages = vec![];
        let mut label: Option<Literal> = None;
        let segments = match_brackets(body, self.options.escape_character)
            .map_err(|error| error.offset_by(body_offset))?;
        for segment in segments {
            match segment.kind {
                BracketMatchKind::Outside => {
                    label = Some(Literal::trimmed(
                        segment.text(body),
                        body_offset + segment.start,
                    ));
                }
                BracketMatchKind::Open => {
                    if label.is_none() {
                        let open_offset = body_offset + segment.start;
                        label = Some(Literal::new("", open_offset, open_offset));
                    }
                }
                BracketMatchKind::Content => {
                    let case = self.parse_nested(
                        segment.text(body),
                        body_offset + segment.start,
                        false,
                        depth + 1,
                    )?;
                    if let Some(label) = label.take() {
                        messages.push((label, case));
                    }
                }
                BracketMatchKind::Close => {}
            }
        }

        Ok(Message::Complex(ComplexMessage {
            argument,
            complex_type,
            messages,
            start: offset,
            end: offset + text.len(),
        }))
    }
}

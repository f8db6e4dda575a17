use std::borrow::Cow;

use arb_json_walker::{unescape_json_str, JsonValue, JsonVisitor};

use crate::error::ParseError;
use crate::model::{
    Key, Literal, Message, MessageEntry, MessageList, Metadata, MetadataEntry, PlaceholderMetadata,
};
use crate::parser::MessageParser;

const DEFAULT_INDENTATION: (usize, char) = (2, ' ');

/// Depth of the properties of the root object.
const TOP_LEVEL: usize = 1;
/// Depth of the properties inside of a metadata object.
const METADATA_LEVEL: usize = 2;

/// Metadata block currently being read.
struct OpenMetadata {
    key: Key,
    metadata_start: usize,
    placeholders: Vec<PlaceholderMetadata>,
    description: Option<Literal>,
    /// Depth of the `placeholders` object while it is open.
    placeholders_depth: Option<usize>,
    placeholders_body_start: Option<usize>,
    placeholders_body_end: Option<usize>,
    last_placeholder_end: Option<usize>,
    last_property_end: Option<usize>,
    /// Name of the most recent property directly inside of the metadata object.
    current_property: Option<String>,
}

impl OpenMetadata {
    fn new(key: Key, metadata_start: usize) -> Self {
        Self {
            key,
            metadata_start,
            placeholders: vec![],
            description: None,
            placeholders_depth: None,
            placeholders_body_start: None,
            placeholders_body_end: None,
            last_placeholder_end: None,
            last_property_end: None,
            current_property: None,
        }
    }

    fn end_placeholder(&mut self, end: usize) {
        if let Some(placeholder) = self.placeholders.last_mut() {
            if placeholder.object_end.is_none() {
                placeholder.object_end = Some(end);
                self.last_placeholder_end = Some(end);
            }
        }
    }

    fn finish(mut self, metadata_end: usize) -> MetadataEntry {
        self.key.end_of_message = Some(metadata_end);
        MetadataEntry {
            key: self.key,
            metadata: Metadata {
                placeholders: self.placeholders,
                description: self.description,
                metadata_start: self.metadata_start,
                metadata_end,
                last_placeholder_end: self.last_placeholder_end,
                placeholders_body_start: self.placeholders_body_start,
                placeholders_body_end: self.placeholders_body_end,
                last_property_end: self.last_property_end,
            },
        }
    }
}

/// Classifies the events of a JSON walk over an ARB document into messages, metadata, and global
/// settings, parsing every message value along the way.
pub(crate) struct ArbDocumentVisitor<'a> {
    text: &'a str,
    parser: MessageParser,
    depth: usize,
    message_key: Option<Key>,
    metadata_key: Option<Key>,
    global_key: Option<String>,
    open_metadata: Option<OpenMetadata>,
    indentation: Option<(usize, char)>,
    is_reference: bool,
    locale: Option<Literal>,
    messages: Vec<MessageEntry>,
    metadata: Vec<MetadataEntry>,
    errors: Vec<ParseError>,
}

impl<'a> ArbDocumentVisitor<'a> {
    pub fn new(text: &'a str, parser: MessageParser) -> Self {
        Self {
            text,
            parser,
            depth: 0,
            message_key: None,
            metadata_key: None,
            global_key: None,
            open_metadata: None,
            indentation: None,
            is_reference: false,
            locale: None,
            messages: vec![],
            metadata: vec![],
            errors: vec![],
        }
    }

    pub fn finish(self) -> (MessageList, Vec<ParseError>) {
        let list = MessageList::new(
            self.is_reference,
            self.locale,
            self.indentation.unwrap_or(DEFAULT_INDENTATION),
            self.messages,
            self.metadata,
        );
        (list, self.errors)
    }

    fn on_top_level_property(&mut self, name: &str, start: usize, end: usize) {
        if self.indentation.is_none() {
            let indentation = sniff_indentation(self.text, start - 1);
            self.indentation = Some(indentation.unwrap_or(DEFAULT_INDENTATION));
        }

        self.message_key = None;
        self.metadata_key = None;
        self.global_key = None;
        if name.starts_with("@@") {
            self.global_key = Some(decode_name(name).into_owned());
        } else if name.starts_with('@') {
            self.metadata_key = Some(Key::new(name, start, end));
        } else {
            self.message_key = Some(Key::new(name, start, end));
        }
    }

    fn on_top_level_value(&mut self, value: JsonValue, offset: usize, length: usize) {
        if let Some(mut key) = self.message_key.take() {
            let Some(raw) = value.as_raw_str() else {
                tracing::debug!(key = key.value(), "skipping message with a non-string value");
                return;
            };
            key.end_of_message = Some(offset + length);
            // A value that can't be parsed is kept as one plain literal, so the entry still
            // participates in key and metadata checks.
            let (message, parse_failed) = match self.parser.parse_value(raw, offset + 1) {
                Ok(message) => (message, false),
                Err(error) => {
                    self.errors.push(error);
                    let literal = Literal::new(raw, offset + 1, offset + length - 1);
                    (Message::Literal(literal), true)
                }
            };
            self.messages.push(MessageEntry {
                key,
                message,
                parse_failed,
            });
        } else if let Some(global) = self.global_key.take() {
            match (global.as_str(), value) {
                ("@@x-reference", JsonValue::Bool(is_reference)) => {
                    self.is_reference = is_reference
                }
                ("@@locale", JsonValue::String(raw)) => {
                    self.locale = Some(Literal::new(raw, offset + 1, offset + length - 1))
                }
                _ => {}
            }
        } else if self.metadata_key.take().is_some() {
            tracing::debug!(offset, "skipping metadata with a non-object value");
        }
    }

    /// Record the end of any value that sits directly inside of the open metadata block, or
    /// directly inside of its placeholders object.
    fn on_value_end(&mut self, depth: usize, end: usize) {
        let Some(metadata) = self.open_metadata.as_mut() else {
            return;
        };
        if depth == METADATA_LEVEL {
            metadata.last_property_end = Some(end);
        } else if metadata.placeholders_depth == Some(depth) {
            metadata.end_placeholder(end);
        }
    }
}

impl JsonVisitor for ArbDocumentVisitor<'_> {
    fn on_object_begin(&mut self, offset: usize) {
        if self.depth == TOP_LEVEL {
            if let Some(key) = self.metadata_key.take() {
                self.open_metadata = Some(OpenMetadata::new(key, offset + 1));
            } else if let Some(key) = self.message_key.take() {
                tracing::debug!(key = key.value(), "skipping message with an object value");
            }
        } else if self.depth == METADATA_LEVEL {
            if let Some(metadata) = self.open_metadata.as_mut() {
                if metadata.current_property.as_deref() == Some("placeholders") {
                    metadata.placeholders_depth = Some(self.depth + 1);
                    metadata.placeholders_body_start = Some(offset + 1);
                }
            }
        }
        self.depth += 1;
    }

    fn on_object_property(&mut self, name: &str, offset: usize, length: usize) {
        let (start, end) = (offset + 1, offset + length - 1);
        if self.depth == TOP_LEVEL {
            self.on_top_level_property(name, start, end);
            return;
        }

        let depth = self.depth;
        let Some(metadata) = self.open_metadata.as_mut() else {
            return;
        };
        if depth == METADATA_LEVEL {
            metadata.current_property = Some(decode_name(name).into_owned());
        } else if metadata.placeholders_depth == Some(depth) {
            metadata.placeholders.push(PlaceholderMetadata {
                literal: Literal::new(name, start, end),
                object_end: None,
            });
        }
    }

    fn on_object_end(&mut self, offset: usize, length: usize) {
        let end = offset + length;
        let depth = self.depth;
        self.depth = self.depth.saturating_sub(1);

        if depth == METADATA_LEVEL {
            if let Some(metadata) = self.open_metadata.take() {
                self.metadata.push(metadata.finish(end));
            }
            return;
        }
        if let Some(metadata) = self.open_metadata.as_mut() {
            if metadata.placeholders_depth == Some(depth) {
                metadata.placeholders_depth = None;
                metadata.placeholders_body_end = Some(offset);
            }
        }
        self.on_value_end(self.depth, end);
    }

    fn on_array_begin(&mut self, _offset: usize) {
        if self.depth == TOP_LEVEL {
            self.message_key = None;
            self.metadata_key = None;
            self.global_key = None;
        }
        self.depth += 1;
    }

    fn on_array_end(&mut self, offset: usize, length: usize) {
        self.depth = self.depth.saturating_sub(1);
        self.on_value_end(self.depth, offset + length);
    }

    fn on_literal_value(&mut self, value: JsonValue, offset: usize, length: usize) {
        if self.depth == TOP_LEVEL {
            self.on_top_level_value(value, offset, length);
            return;
        }

        if self.depth == METADATA_LEVEL {
            if let (Some(metadata), JsonValue::String(raw)) = (self.open_metadata.as_mut(), value)
            {
                if metadata.current_property.as_deref() == Some("description") {
                    metadata.description =
                        Some(Literal::new(raw, offset + 1, offset + length - 1));
                }
            }
        }
        self.on_value_end(self.depth, offset + length);
    }
}

/// Property names are matched against reserved names by their decoded value. Names with invalid
/// escapes never match, so they are left as written.
fn decode_name(name: &str) -> Cow<'_, str> {
    unescape_json_str(name).unwrap_or(Cow::Borrowed(name))
}

/// Determine the indentation used by the document from the whitespace preceding its first
/// top-level property, given the offset of that property's opening quote.
fn sniff_indentation(text: &str, property_offset: usize) -> Option<(usize, char)> {
    let before = &text.as_bytes()[..property_offset];
    let line_start = memchr::memrchr(b'\n', before)? + 1;
    let leading = &text[line_start..property_offset];
    let character = leading.chars().next()?;
    if !matches!(character, ' ' | '\t') || leading.chars().any(|ch| ch != character) {
        return None;
    }
    Some((leading.chars().count(), character))
}

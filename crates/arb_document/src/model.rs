use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::visitor::collect_placeholders;

/// A half-open `(start, end)` byte span into the full document text.
pub type TextRange = (usize, usize);

/// A span of source text with its exact value. For tokens that have been trimmed of surrounding
/// whitespace, the span covers only the trimmed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Literal {
    pub value: String,
    pub start: usize,
    pub end: usize,
}

impl Literal {
    pub fn new(value: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            value: value.into(),
            start,
            end,
        }
    }

    /// Create a literal from `text` trimmed of surrounding whitespace, where `offset` is the
    /// absolute position of the first byte of the untrimmed `text`.
    pub fn trimmed(text: &str, offset: usize) -> Self {
        let leading = text.len() - text.trim_start().len();
        let value = text.trim();
        let start = offset + leading;
        Self::new(value, start, start + value.len())
    }

    pub fn range(&self) -> TextRange {
        (self.start, self.end)
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

/// A property name in the document. Message and metadata keys also know where their value ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    #[serde(flatten)]
    pub literal: Literal,
    /// Offset immediately after the sibling value of this key, once it has been parsed.
    pub end_of_message: Option<usize>,
}

impl Key {
    pub fn new(value: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            literal: Literal::new(value, start, end),
            end_of_message: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.literal.value
    }

    pub fn range(&self) -> TextRange {
        self.literal.range()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Message {
    Literal(Literal),
    Placeholder(Literal),
    Combined(CombinedMessage),
    Complex(ComplexMessage),
}

impl Message {
    pub fn start(&self) -> usize {
        match self {
            Message::Literal(literal) | Message::Placeholder(literal) => literal.start,
            Message::Combined(combined) => combined.start,
            Message::Complex(complex) => complex.start,
        }
    }

    pub fn end(&self) -> usize {
        match self {
            Message::Literal(literal) | Message::Placeholder(literal) => literal.end,
            Message::Combined(combined) => combined.end,
            Message::Complex(complex) => complex.end,
        }
    }

    pub fn range(&self) -> TextRange {
        (self.start(), self.end())
    }

    /// Every placeholder referenced by this message, including the arguments of complex messages,
    /// in source order.
    pub fn placeholders(&self) -> Vec<&Literal> {
        collect_placeholders(self)
    }

    /// Returns the innermost named node of this message that contains `offset`.
    pub fn node_at(&self, offset: usize) -> Option<NodeRef<'_>> {
        match self {
            Message::Literal(literal) => literal
                .contains(offset)
                .then_some(NodeRef::Literal(literal)),
            Message::Placeholder(placeholder) => placeholder
                .contains(offset)
                .then_some(NodeRef::Placeholder(placeholder)),
            Message::Combined(combined) => combined
                .parts
                .iter()
                .find_map(|part| part.node_at(offset)),
            Message::Complex(complex) => {
                if complex.argument.contains(offset) {
                    return Some(NodeRef::Argument(&complex.argument));
                }
                if complex.complex_type.contains(offset) {
                    return Some(NodeRef::ComplexType(&complex.complex_type));
                }
                complex.messages.iter().find_map(|(label, message)| {
                    if label.contains(offset) {
                        Some(NodeRef::CaseLabel(label))
                    } else {
                        message.node_at(offset)
                    }
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedMessage {
    pub parts: Vec<Message>,
    pub start: usize,
    pub end: usize,
}

/// An ICU `plural`, `select`, or `gender` construct. The span covers the content between the
/// surrounding braces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexMessage {
    pub argument: Literal,
    pub complex_type: Literal,
    pub messages: Vec<(Literal, Message)>,
    pub start: usize,
    pub end: usize,
}

impl ComplexMessage {
    pub fn has_case(&self, label: &str) -> bool {
        self.messages.iter().any(|(key, _)| key.value == label)
    }

    pub fn is_plural(&self) -> bool {
        self.complex_type.value.contains("plural")
    }
}

/// A placeholder declared in the `placeholders` object of a metadata block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderMetadata {
    #[serde(flatten)]
    pub literal: Literal,
    /// Offset immediately after the declaration's value.
    pub object_end: Option<usize>,
}

impl PlaceholderMetadata {
    pub fn name(&self) -> &str {
        &self.literal.value
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub placeholders: Vec<PlaceholderMetadata>,
    pub description: Option<Literal>,
    /// Offset immediately after the opening `{` of the metadata object.
    pub metadata_start: usize,
    /// Offset immediately after the closing `}` of the metadata object.
    pub metadata_end: usize,
    /// Offset immediately after the last declared placeholder's value.
    pub last_placeholder_end: Option<usize>,
    /// Offset immediately after the `{` of the `placeholders` object, if there is one.
    pub placeholders_body_start: Option<usize>,
    /// Offset of the closing `}` of the `placeholders` object, if there is one.
    pub placeholders_body_end: Option<usize>,
    /// Offset immediately after the value of the last property in the metadata object.
    pub last_property_end: Option<usize>,
}

impl Metadata {
    pub fn declares(&self, name: &str) -> bool {
        self.placeholders
            .iter()
            .any(|placeholder| placeholder.name() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageEntry {
    pub key: Key,
    pub message: Message,
    /// Set when the value has unbalanced braces. The message is then the raw value as a single
    /// literal, so it says nothing about which placeholders are used.
    pub parse_failed: bool,
}

impl MessageEntry {
    /// The span from the start of the key to the end of the message value.
    pub fn range(&self) -> TextRange {
        (
            self.key.literal.start,
            self.key.end_of_message.unwrap_or(self.message.end()),
        )
    }

    pub fn contains(&self, offset: usize) -> bool {
        let (start, end) = self.range();
        start <= offset && offset <= end
    }

    /// The name of the metadata key that describes this message.
    pub fn metadata_key(&self) -> String {
        format!("@{}", self.key.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataEntry {
    pub key: Key,
    pub metadata: Metadata,
}

impl MetadataEntry {
    /// The key of the message this metadata describes, without the leading `@`.
    pub fn message_key(&self) -> &str {
        self.key
            .value()
            .strip_prefix('@')
            .unwrap_or(self.key.value())
    }
}

/// A reference to a named node somewhere inside a message entry, as found by offset lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'a> {
    Key(&'a Key),
    Literal(&'a Literal),
    Placeholder(&'a Literal),
    Argument(&'a Literal),
    ComplexType(&'a Literal),
    CaseLabel(&'a Literal),
}

impl<'a> NodeRef<'a> {
    pub fn literal(&self) -> &'a Literal {
        match self {
            NodeRef::Key(key) => &key.literal,
            NodeRef::Literal(literal)
            | NodeRef::Placeholder(literal)
            | NodeRef::Argument(literal)
            | NodeRef::ComplexType(literal)
            | NodeRef::CaseLabel(literal) => literal,
        }
    }

    /// True for nodes that name a placeholder, either directly or as a complex argument.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, NodeRef::Placeholder(_) | NodeRef::Argument(_))
    }
}

/// The complete model of a parsed ARB document. It is rebuilt from scratch on every parse and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageList {
    /// Set by `"@@x-reference": true`.
    pub is_reference: bool,
    pub locale: Option<Literal>,
    pub indentation_count: usize,
    pub indentation_character: char,
    pub messages: Vec<MessageEntry>,
    pub metadata: Vec<MetadataEntry>,
    #[serde(skip)]
    metadata_index: FxHashMap<String, usize>,
    #[serde(skip)]
    message_index: FxHashMap<String, usize>,
}

impl Default for MessageList {
    fn default() -> Self {
        Self::new(false, None, (2, ' '), vec![], vec![])
    }
}

impl MessageList {
    pub fn new(
        is_reference: bool,
        locale: Option<Literal>,
        (indentation_count, indentation_character): (usize, char),
        messages: Vec<MessageEntry>,
        metadata: Vec<MetadataEntry>,
    ) -> Self {
        // Lookups resolve to the first matching key in document order, so later duplicates must
        // never overwrite an earlier entry in the index.
        let mut metadata_index = FxHashMap::default();
        for (index, entry) in metadata.iter().enumerate() {
            metadata_index
                .entry(entry.key.value().to_string())
                .or_insert(index);
        }
        let mut message_index = FxHashMap::default();
        for (index, entry) in messages.iter().enumerate() {
            message_index
                .entry(entry.key.value().to_string())
                .or_insert(index);
        }

        Self {
            is_reference,
            locale,
            indentation_count,
            indentation_character,
            messages,
            metadata,
            metadata_index,
            message_index,
        }
    }

    /// Returns the metadata block for `entry`, matched by the key `@<entry key>`.
    pub fn metadata_for(&self, entry: &MessageEntry) -> Option<&MetadataEntry> {
        self.metadata_for_key(entry.key.value())
    }

    pub fn metadata_for_key(&self, message_key: &str) -> Option<&MetadataEntry> {
        self.metadata_index
            .get(&format!("@{message_key}"))
            .map(|index| &self.metadata[*index])
    }

    /// Returns the message described by the given metadata block, if one exists.
    pub fn message_for_metadata(&self, metadata: &MetadataEntry) -> Option<&MessageEntry> {
        self.message_index
            .get(metadata.message_key())
            .map(|index| &self.messages[*index])
    }

    /// Returns the message entry whose key or value contains `offset`.
    pub fn entry_at(&self, offset: usize) -> Option<&MessageEntry> {
        self.messages.iter().find(|entry| entry.contains(offset))
    }

    /// Returns the owning message entry and the innermost named node at `offset`.
    pub fn node_at(&self, offset: usize) -> Option<(&MessageEntry, NodeRef<'_>)> {
        let entry = self.entry_at(offset)?;
        if entry.key.literal.contains(offset) {
            return Some((entry, NodeRef::Key(&entry.key)));
        }
        entry.message.node_at(offset).map(|node| (entry, node))
    }

    /// The file's own indentation unit repeated `levels` times.
    pub fn indentation(&self, levels: usize) -> String {
        self.indentation_character
            .to_string()
            .repeat(self.indentation_count * levels)
    }
}

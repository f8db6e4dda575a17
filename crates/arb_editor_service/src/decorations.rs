use arb_document::{walk_message, ComplexMessage, Literal, MessageList, MessageVisitor, TextRange};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DecorationCategory {
    Placeholder,
    Select,
    Plural,
    /// Placeholder names declared in metadata.
    Metadata,
}

impl DecorationCategory {
    pub const ALL: [DecorationCategory; 4] = [
        DecorationCategory::Placeholder,
        DecorationCategory::Select,
        DecorationCategory::Plural,
        DecorationCategory::Metadata,
    ];
}

/// Every highlighted span of a document, grouped by category and in document order. A new value
/// is built for each analysis and replaces the previous one entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Decorations {
    placeholder: Vec<TextRange>,
    select: Vec<TextRange>,
    plural: Vec<TextRange>,
    metadata: Vec<TextRange>,
}

impl Decorations {
    pub fn get(&self, category: DecorationCategory) -> &[TextRange] {
        match category {
            DecorationCategory::Placeholder => &self.placeholder,
            DecorationCategory::Select => &self.select,
            DecorationCategory::Plural => &self.plural,
            DecorationCategory::Metadata => &self.metadata,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (DecorationCategory, &[TextRange])> {
        DecorationCategory::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
    }

    pub fn len(&self) -> usize {
        self.iter().map(|(_, ranges)| ranges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, category: DecorationCategory, range: TextRange) {
        let ranges = match category {
            DecorationCategory::Placeholder => &mut self.placeholder,
            DecorationCategory::Select => &mut self.select,
            DecorationCategory::Plural => &mut self.plural,
            DecorationCategory::Metadata => &mut self.metadata,
        };
        ranges.push(range);
    }
}

impl<'a> MessageVisitor<'a> for Decorations {
    fn visit_placeholder(&mut self, placeholder: &'a Literal) {
        self.push(DecorationCategory::Placeholder, placeholder.range());
    }

    fn visit_case_label(&mut self, label: &'a Literal, message: &'a ComplexMessage) {
        // Cases written without a label have nothing to highlight.
        if label.start == label.end {
            return;
        }
        let category = if message.is_plural() {
            DecorationCategory::Plural
        } else {
            DecorationCategory::Select
        };
        self.push(category, label.range());
    }
}

pub fn decorate(list: &MessageList) -> Decorations {
    let mut decorations = Decorations::default();
    for entry in &list.messages {
        walk_message(&mut decorations, &entry.message);
    }
    for entry in &list.metadata {
        for placeholder in &entry.metadata.placeholders {
            decorations.push(DecorationCategory::Metadata, placeholder.literal.range());
        }
    }
    decorations
}

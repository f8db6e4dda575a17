use crate::model::{CombinedMessage, ComplexMessage, Literal, Message};

/// Indicators of how to continue traversal after visiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalControl {
    /// Continue traversing the tree as normal.
    Continue,
    /// Don't descend into any child nodes of the current node, but continue with its siblings.
    SkipChildren,
}

/// Read-only visitor over a message tree. Every method has an empty default, so implementors only
/// override what they care about. Nodes are borrowed for `'a`, letting visitors collect references
/// into the tree.
pub trait MessageVisitor<'a> {
    fn visit_literal(&mut self, _literal: &'a Literal) {}
    fn visit_placeholder(&mut self, _placeholder: &'a Literal) {}
    fn visit_combined(&mut self, _message: &'a CombinedMessage) {}
    fn visit_complex(&mut self, _message: &'a ComplexMessage) -> TraversalControl {
        TraversalControl::Continue
    }
    /// The argument of a complex message is treated as a placeholder unless overridden.
    fn visit_argument(&mut self, argument: &'a Literal, _message: &'a ComplexMessage) {
        self.visit_placeholder(argument);
    }
    fn visit_complex_type(&mut self, _complex_type: &'a Literal, _message: &'a ComplexMessage) {}
    fn visit_case_label(&mut self, _label: &'a Literal, _message: &'a ComplexMessage) {}
}

pub fn walk_message<'a, V: MessageVisitor<'a>>(visitor: &mut V, message: &'a Message) {
    match message {
        Message::Literal(literal) => visitor.visit_literal(literal),
        Message::Placeholder(placeholder) => visitor.visit_placeholder(placeholder),
        Message::Combined(combined) => {
            visitor.visit_combined(combined);
            for part in &combined.parts {
                walk_message(visitor, part);
            }
        }
        Message::Complex(complex) => {
            if visitor.visit_complex(complex) == TraversalControl::SkipChildren {
                return;
            }
            visitor.visit_argument(&complex.argument, complex);
            visitor.visit_complex_type(&complex.complex_type, complex);
            for (label, case) in &complex.messages {
                visitor.visit_case_label(label, complex);
                walk_message(visitor, case);
            }
        }
    }
}

struct PlaceholderCollector<'a> {
    placeholders: Vec<&'a Literal>,
}

impl<'a> MessageVisitor<'a> for PlaceholderCollector<'a> {
    fn visit_placeholder(&mut self, placeholder: &'a Literal) {
        self.placeholders.push(placeholder);
    }
}

pub(crate) fn collect_placeholders(message: &Message) -> Vec<&Literal> {
    let mut collector = PlaceholderCollector {
        placeholders: vec![],
    };
    walk_message(&mut collector, message);
    collector.placeholders
}

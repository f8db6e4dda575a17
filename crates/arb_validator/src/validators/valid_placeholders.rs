use arb_document::{
    walk_message, ComplexMessage, Literal, MessageVisitor, Metadata, ParseOutcome,
    TraversalControl, COMPLEX_MESSAGE_TYPES,
};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::macros::document_validation_rule;
use crate::validators::validator::ValidatorContext;
use crate::DiagnosticSeverity;

static VALID_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_$]*$").unwrap());

document_validation_rule!(ValidPlaceholders);

impl ValidPlaceholders {
    fn check_document(&mut self, outcome: &ParseOutcome) {
        let list = &outcome.messages;
        for entry in &list.messages {
            let mut visitor = PlaceholderChecker {
                context: &mut self.context,
                metadata: list.metadata_for(entry).map(|metadata| &metadata.metadata),
            };
            walk_message(&mut visitor, &entry.message);
        }
    }
}

struct PlaceholderChecker<'c, 'a> {
    context: &'c mut ValidatorContext,
    metadata: Option<&'a Metadata>,
}

impl<'a> MessageVisitor<'a> for PlaceholderChecker<'_, 'a> {
    fn visit_placeholder(&mut self, placeholder: &'a Literal) {
        if !VALID_PLACEHOLDER.is_match(&placeholder.value) {
            self.context.report(Diagnostic::new(
                DiagnosticCode::InvalidPlaceholder,
                DiagnosticSeverity::Error,
                placeholder.range(),
                "Placeholder must start with a letter and contain only letters, numbers, underscores, and `$`.",
            ));
        } else if !self
            .metadata
            .is_some_and(|metadata| metadata.declares(&placeholder.value))
        {
            self.context.report(
                Diagnostic::new(
                    DiagnosticCode::PlaceholderWithoutMetadata,
                    DiagnosticSeverity::Warning,
                    placeholder.range(),
                    format!(
                        "Placeholder `{}` is not declared in the metadata of this message",
                        placeholder.value
                    ),
                )
                .with_help("Declare it under `placeholders` in the message's metadata"),
            );
        }
    }

    fn visit_complex(&mut self, message: &'a ComplexMessage) -> TraversalControl {
        // Cases of an unknown message type are not validated, but its argument still is.
        if !COMPLEX_MESSAGE_TYPES.contains(&message.complex_type.value.as_str()) {
            self.visit_placeholder(&message.argument);
            return TraversalControl::SkipChildren;
        }
        TraversalControl::Continue
    }
}

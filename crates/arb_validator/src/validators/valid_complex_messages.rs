use arb_document::{
    walk_message, ComplexMessage, MessageVisitor, ParseOutcome, TraversalControl,
    COMPLEX_MESSAGE_TYPES,
};

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::macros::document_validation_rule;
use crate::DiagnosticSeverity;

document_validation_rule!(ValidComplexMessages);

impl ValidComplexMessages {
    fn check_document(&mut self, outcome: &ParseOutcome) {
        for entry in &outcome.messages.messages {
            walk_message(self, &entry.message);
        }
    }
}

impl<'a> MessageVisitor<'a> for ValidComplexMessages {
    fn visit_complex(&mut self, message: &'a ComplexMessage) -> TraversalControl {
        if !message.has_case("other") {
            self.context.report(
                Diagnostic::new(
                    DiagnosticCode::MissingOtherInIcu,
                    DiagnosticSeverity::Error,
                    (message.start, message.end),
                    "ICU message is missing an `other` case",
                )
                .with_help("`other` is used whenever no other case matches the value"),
            );
        }

        let complex_type = &message.complex_type;
        if !COMPLEX_MESSAGE_TYPES.contains(&complex_type.value.as_str()) {
            self.context.report(Diagnostic::new(
                DiagnosticCode::UnknownIcuMessageType,
                DiagnosticSeverity::Error,
                complex_type.range(),
                format!(
                    "Unknown ICU message type `{}`. Valid types are {}.",
                    complex_type.value,
                    COMPLEX_MESSAGE_TYPES.join(", ")
                ),
            ));
            return TraversalControl::SkipChildren;
        }
        TraversalControl::Continue
    }
}

use arb_document::ParseOutcome;

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::macros::document_validation_rule;
use crate::DiagnosticSeverity;

document_validation_rule!(MismatchedBrackets);

impl MismatchedBrackets {
    fn check_document(&mut self, outcome: &ParseOutcome) {
        for error in &outcome.errors {
            self.context.report(
                Diagnostic::new(
                    DiagnosticCode::MismatchedBrackets,
                    DiagnosticSeverity::Error,
                    (error.start, error.end),
                    "Mismatched brackets in message",
                )
                .with_help("Every `{` must be closed by a `}`. Use `'` to write a literal brace."),
            );
        }
    }
}

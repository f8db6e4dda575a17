use arb_document::ParseOutcome;

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::macros::document_validation_rule;
use crate::DiagnosticSeverity;

document_validation_rule!(NoMetadataForMissingKey);

impl NoMetadataForMissingKey {
    fn check_document(&mut self, outcome: &ParseOutcome) {
        let list = &outcome.messages;
        for metadata in &list.metadata {
            if list.message_for_metadata(metadata).is_some() {
                continue;
            }
            self.context.report(Diagnostic::new(
                DiagnosticCode::MetadataForMissingKey,
                DiagnosticSeverity::Error,
                metadata.key.range(),
                format!(
                    "Metadata for an undefined key. Add a message key `{}` or remove this metadata.",
                    metadata.message_key()
                ),
            ));
        }
    }
}

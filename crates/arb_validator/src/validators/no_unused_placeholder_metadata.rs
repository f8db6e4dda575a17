use arb_document::ParseOutcome;
use rustc_hash::FxHashSet;

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::macros::document_validation_rule;
use crate::DiagnosticSeverity;

document_validation_rule!(NoUnusedPlaceholderMetadata);

impl NoUnusedPlaceholderMetadata {
    fn check_document(&mut self, outcome: &ParseOutcome) {
        let list = &outcome.messages;
        for entry in list.messages.iter().filter(|entry| !entry.parse_failed) {
            let Some(metadata) = list.metadata_for(entry) else {
                continue;
            };
            let used: FxHashSet<&str> = entry
                .message
                .placeholders()
                .into_iter()
                .map(|placeholder| placeholder.value.as_str())
                .collect();

            for declared in &metadata.metadata.placeholders {
                if used.contains(declared.name()) {
                    continue;
                }
                self.context.report(
                    Diagnostic::new(
                        DiagnosticCode::MissingPlaceholderWithMetadata,
                        DiagnosticSeverity::Warning,
                        declared.literal.range(),
                        format!(
                            "Placeholder `{}` is declared but not used by the message",
                            declared.name()
                        ),
                    )
                    .with_help("Remove the declaration or use the placeholder in the message"),
                );
            }
        }
    }
}

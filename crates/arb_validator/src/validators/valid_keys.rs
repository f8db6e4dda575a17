use arb_document::ParseOutcome;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::validators::validator::{Validator, ValidatorContext};
use crate::DiagnosticSeverity;

static VALID_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").unwrap());

/// Checks that every message key is a valid identifier and, in reference files, that every
/// message is described by metadata.
pub struct ValidKeys {
    context: ValidatorContext,
    report_missing_metadata: bool,
}

impl ValidKeys {
    pub fn new(report_missing_metadata: bool) -> Self {
        Self {
            context: ValidatorContext::default(),
            report_missing_metadata,
        }
    }

    fn check_document(&mut self, outcome: &ParseOutcome) {
        let list = &outcome.messages;
        for entry in &list.messages {
            if !VALID_KEY.is_match(entry.key.value()) {
                self.context.report(
                    Diagnostic::new(
                        DiagnosticCode::InvalidKey,
                        DiagnosticSeverity::Error,
                        entry.key.range(),
                        "Key must start with a letter and contain only letters, numbers, and underscores.",
                    )
                    .with_help("ARB keys are used as method names in generated code"),
                );
            } else if self.report_missing_metadata
                && list.is_reference
                && list.metadata_for(entry).is_none()
            {
                self.context.report(Diagnostic::new(
                    DiagnosticCode::MissingMetadataForKey,
                    DiagnosticSeverity::Information,
                    entry.key.range(),
                    format!("The message with key `{}` has no metadata", entry.key.value()),
                ));
            }
        }
    }
}

impl Validator for ValidKeys {
    fn validate(&mut self, outcome: &ParseOutcome) -> Vec<Diagnostic> {
        self.check_document(outcome);
        self.context.take()
    }
}

use arb_document::ParseOutcome;

use crate::diagnostic::Diagnostic;
use crate::validators;
use crate::validators::validator::Validator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Report reference-file messages that have no metadata as informational diagnostics.
    pub report_missing_metadata: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            report_missing_metadata: true,
        }
    }
}

/// Run every rule over a parsed document. Diagnostics are ordered by rule, then by their position
/// in the document.
pub fn validate(outcome: &ParseOutcome) -> Vec<Diagnostic> {
    validate_with_options(outcome, ValidatorOptions::default())
}

pub fn validate_with_options(outcome: &ParseOutcome, options: ValidatorOptions) -> Vec<Diagnostic> {
    let mut diagnostics: Vec<Diagnostic> = vec![];
    let mut validators: Vec<Box<dyn Validator>> = vec![
        Box::new(validators::MismatchedBrackets::new()),
        Box::new(validators::NoMetadataForMissingKey::new()),
        Box::new(validators::ValidKeys::new(options.report_missing_metadata)),
        Box::new(validators::ValidPlaceholders::new()),
        Box::new(validators::ValidComplexMessages::new()),
        Box::new(validators::NoUnusedPlaceholderMetadata::new()),
    ];
    for validator in validators.iter_mut() {
        diagnostics.extend(validator.validate(outcome));
    }

    tracing::debug!(count = diagnostics.len(), "validated ARB document");
    diagnostics
}

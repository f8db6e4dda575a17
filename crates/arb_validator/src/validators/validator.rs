use arb_document::ParseOutcome;

use crate::diagnostic::Diagnostic;

pub trait Validator {
    fn validate(&mut self, outcome: &ParseOutcome) -> Vec<Diagnostic>;
}

#[derive(Debug, Default)]
pub struct ValidatorContext {
    diagnostics: Vec<Diagnostic>,
}

impl ValidatorContext {
    pub fn report(&mut self, diagnostic: Diagnostic) {
        tracing::trace!(
            code = diagnostic.code.as_str(),
            start = diagnostic.span.0,
            end = diagnostic.span.1,
            "reporting diagnostic"
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

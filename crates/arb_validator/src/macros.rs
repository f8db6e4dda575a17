/// Create the boilerplate for a standard validation rule using `check_document` as the entrypoint
/// for validating a parsed document.
macro_rules! document_validation_rule {
    ($name:ident) => {
        pub struct $name {
            context: crate::validators::validator::ValidatorContext,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    context: crate::validators::validator::ValidatorContext::default(),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl crate::validators::validator::Validator for $name {
            fn validate(
                &mut self,
                outcome: &arb_document::ParseOutcome,
            ) -> Vec<crate::diagnostic::Diagnostic> {
                self.check_document(outcome);
                self.context.take()
            }
        }
    };
}

pub(crate) use document_validation_rule;

pub use crate::content::{validate, validate_with_options, ValidatorOptions};
pub use crate::diagnostic::{Diagnostic, DiagnosticCode};
pub use crate::fix::{apply_fixes, quick_fix, DiagnosticFix};
pub use crate::severity::DiagnosticSeverity;

mod content;
mod diagnostic;
pub mod fix;
mod macros;
mod severity;
pub mod validators;

use arb_validator::validators::NoUnusedPlaceholderMetadata;
use arb_validator::{DiagnosticCode, DiagnosticSeverity};

use crate::assert_has_diagnostic;
use crate::harness;

fn document(content: &str, placeholders: &str) -> String {
    format!(
        "{{\n  \"message\": \"{content}\",\n  \"@message\": {{\n    \"placeholders\": {{{placeholders}}}\n  }}\n}}"
    )
}

#[test]
fn all_declarations_used() {
    let text = document("{a} and {b}", "\"a\": {}, \"b\": {}");
    assert!(harness::validate_with(&text, NoUnusedPlaceholderMetadata::new()).is_empty());
}

#[test]
fn unused_declaration() {
    let text = document("Hello {name}", "\"name\": {}, \"unused\": {\"type\": \"String\"}");
    let diagnostics = harness::validate_with(&text, NoUnusedPlaceholderMetadata::new());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Warning);
    assert_has_diagnostic!(
        diagnostics,
        DiagnosticCode::MissingPlaceholderWithMetadata,
        harness::span_of(&text, "unused")
    );
}

#[test]
fn placeholders_in_cases_count_as_used() {
    let text = document(
        "{count, plural, one{{author} wrote one} other{{author} wrote {count}}}",
        "\"count\": {}, \"author\": {}",
    );
    assert!(harness::validate_with(&text, NoUnusedPlaceholderMetadata::new()).is_empty());
}

#[test]
fn complex_argument_counts_as_used() {
    let text = document("{gender, select, other{Hi}}", "\"gender\": {}");
    assert!(harness::validate_with(&text, NoUnusedPlaceholderMetadata::new()).is_empty());
}

#[test]
fn metadata_without_placeholders() {
    let text = "{\n  \"message\": \"{a}\",\n  \"@message\": {\"description\": \"A\"}\n}";
    assert!(harness::validate_with(text, NoUnusedPlaceholderMetadata::new()).is_empty());
}

use arb_validator::validators::MismatchedBrackets;
use arb_validator::{Diagnostic, DiagnosticCode, DiagnosticSeverity};

use crate::assert_has_diagnostic;
use crate::harness;

fn validate(content: &str) -> (String, Vec<Diagnostic>) {
    let text = harness::single_message("message", content);
    let diagnostics = harness::validate_with(&text, MismatchedBrackets::new());
    (text, diagnostics)
}

#[test]
fn balanced_message() {
    let (_, diagnostics) = validate("Hello {name}, {n, plural, other{{n} items}}");
    assert!(diagnostics.is_empty());
}

#[test]
fn unclosed_placeholder_spans_whole_value() {
    let (text, diagnostics) = validate("Hello {name");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Error);
    assert_has_diagnostic!(
        diagnostics,
        DiagnosticCode::MismatchedBrackets,
        harness::span_of(&text, "Hello {name")
    );
}

#[test]
fn stray_close_in_case_body() {
    let (text, diagnostics) = validate("{n, plural, other{a}}}");
    assert_has_diagnostic!(
        diagnostics,
        DiagnosticCode::MismatchedBrackets,
        harness::span_of(&text, "{n, plural, other{a}}}")
    );
}

#[test]
fn escaped_braces_are_balanced() {
    let (_, diagnostics) = validate("Use '{ to open");
    assert!(diagnostics.is_empty());
}

#[test]
fn one_diagnostic_per_broken_message() {
    let text = "{\n  \"a\": \"{x\",\n  \"b\": \"fine\",\n  \"c\": \"y}\"\n}";
    let diagnostics = harness::validate_with(text, MismatchedBrackets::new());
    assert_eq!(diagnostics.len(), 2);
    assert_has_diagnostic!(
        diagnostics,
        DiagnosticCode::MismatchedBrackets,
        harness::span_of(text, "{x")
    );
    assert_has_diagnostic!(
        diagnostics,
        DiagnosticCode::MismatchedBrackets,
        harness::span_of(text, "y}")
    );
}

#[test]
fn excessive_nesting_is_reported() {
    let content = format!("{}x{}", "{".repeat(1000), "}".repeat(1000));
    let (text, diagnostics) = validate(&content);
    assert_eq!(diagnostics.len(), 1);
    assert_has_diagnostic!(
        diagnostics,
        DiagnosticCode::MismatchedBrackets,
        harness::span_of(&text, &content)
    );
}

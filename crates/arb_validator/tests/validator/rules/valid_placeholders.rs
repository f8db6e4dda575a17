use arb_validator::validators::ValidPlaceholders;
use arb_validator::{DiagnosticCode, DiagnosticSeverity};
use test_case::test_case;

use crate::assert_has_diagnostic;
use crate::harness;

/// A document with `content` as the message `greeting`, and metadata declaring `declared`.
fn with_metadata(content: &str, declared: &[&str]) -> String {
    let placeholders = declared
        .iter()
        .map(|name| format!("\"{name}\": {{}}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{{\n  \"greeting\": \"{content}\",\n  \"@greeting\": {{\"placeholders\": {{{placeholders}}}}}\n}}"
    )
}

#[test]
fn undeclared_placeholder_without_metadata() {
    let text = harness::single_message("greeting", "Hello {name}!");
    let diagnostics = harness::validate_with(&text, ValidPlaceholders::new());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Warning);
    assert_has_diagnostic!(
        diagnostics,
        DiagnosticCode::PlaceholderWithoutMetadata,
        harness::span_of(&text, "name")
    );
}

#[test]
fn declared_placeholder() {
    let text = with_metadata("Hello {name}!", &["name"]);
    assert!(harness::validate_with(&text, ValidPlaceholders::new()).is_empty());
}

#[test]
fn undeclared_placeholder_with_metadata() {
    let text = with_metadata("Hello {first} {last}!", &["first"]);
    let diagnostics = harness::validate_with(&text, ValidPlaceholders::new());
    assert_eq!(diagnostics.len(), 1);
    assert_has_diagnostic!(
        diagnostics,
        DiagnosticCode::PlaceholderWithoutMetadata,
        harness::span_of(&text, "last")
    );
}

#[test_case("1st"; "leading digit")]
#[test_case("first name"; "space")]
#[test_case("$amount"; "leading dollar")]
#[test_case(""; "empty")]
fn invalid_placeholder(name: &str) {
    let text = with_metadata(&format!("Hi {{{name}}}"), &[]);
    let diagnostics = harness::validate_with(&text, ValidPlaceholders::new());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, DiagnosticCode::InvalidPlaceholder);
    assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Error);
    let start = harness::span_of(&text, "Hi {").1;
    assert_eq!(diagnostics[0].span, (start, start + name.len()));
}

#[test]
fn dollar_is_allowed_after_first_character() {
    let text = with_metadata("{price$usd}", &["price$usd"]);
    assert!(harness::validate_with(&text, ValidPlaceholders::new()).is_empty());
}

#[test]
fn complex_argument_is_a_placeholder() {
    let text = harness::single_message("items", "{count, plural, one{One} other{Many}}");
    let diagnostics = harness::validate_with(&text, ValidPlaceholders::new());
    assert_eq!(diagnostics.len(), 1);
    assert_has_diagnostic!(
        diagnostics,
        DiagnosticCode::PlaceholderWithoutMetadata,
        harness::span_of(&text, "count")
    );
}

#[test]
fn placeholders_in_cases_are_checked() {
    let text = with_metadata("{count, plural, other{{count} by {author}}}", &["count"]);
    let diagnostics = harness::validate_with(&text, ValidPlaceholders::new());
    assert_eq!(diagnostics.len(), 1);
    assert_has_diagnostic!(
        diagnostics,
        DiagnosticCode::PlaceholderWithoutMetadata,
        harness::span_of(&text, "author")
    );
}

#[test]
fn cases_of_unknown_types_are_skipped() {
    let text = harness::single_message("price", "{amount, currency, other{{symbol}}}");
    let diagnostics = harness::validate_with(&text, ValidPlaceholders::new());
    assert_eq!(diagnostics.len(), 1);
    assert_has_diagnostic!(
        diagnostics,
        DiagnosticCode::PlaceholderWithoutMetadata,
        harness::span_of(&text, "amount")
    );
}

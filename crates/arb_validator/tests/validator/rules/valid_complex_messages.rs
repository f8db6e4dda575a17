use arb_validator::validators::ValidComplexMessages;
use arb_validator::DiagnosticCode;
use test_case::test_case;

use crate::assert_has_diagnostic;
use crate::harness;

fn validate(content: &str) -> (String, Vec<arb_validator::Diagnostic>) {
    let text = harness::single_message("message", content);
    let diagnostics = harness::validate_with(&text, ValidComplexMessages::new());
    (text, diagnostics)
}

#[test_case("{n, plural, zero{none} other{some}}"; "plural")]
#[test_case("{g, select, a{A} other{B}}"; "select")]
#[test_case("{g, gender, male{He} female{She} other{They}}"; "gender")]
#[test_case("Just {text}"; "no complex messages")]
fn valid_complex_message(content: &str) {
    let (_, diagnostics) = validate(content);
    assert!(diagnostics.is_empty(), "{diagnostics:#?}");
}

#[test]
fn missing_other() {
    let (text, diagnostics) = validate("{n, plural, =0{none} one{one}}");
    assert_eq!(diagnostics.len(), 1);
    assert_has_diagnostic!(
        diagnostics,
        DiagnosticCode::MissingOtherInIcu,
        harness::span_of(&text, "n, plural, =0{none} one{one}")
    );
}

#[test]
fn other_must_be_exact() {
    let (_, diagnostics) = validate("{n, plural, Other{x} others{y}}");
    assert_eq!(
        harness::count_code(&diagnostics, DiagnosticCode::MissingOtherInIcu),
        1
    );
}

#[test]
fn unknown_type() {
    let (text, diagnostics) = validate("{when, date, other{x}}");
    assert_eq!(diagnostics.len(), 1);
    assert_has_diagnostic!(
        diagnostics,
        DiagnosticCode::UnknownIcuMessageType,
        harness::span_of(&text, "date")
    );
}

#[test]
fn unknown_type_without_cases_reports_both() {
    let (text, diagnostics) = validate("{price, number}");
    assert_eq!(diagnostics.len(), 2);
    assert_has_diagnostic!(
        diagnostics,
        DiagnosticCode::MissingOtherInIcu,
        harness::span_of(&text, "price, number")
    );
    assert_has_diagnostic!(
        diagnostics,
        DiagnosticCode::UnknownIcuMessageType,
        harness::span_of(&text, "number")
    );
}

#[test]
fn nested_messages_are_validated() {
    let (text, diagnostics) = validate("{n, plural, other{{g, select, male{x}}}}");
    assert_eq!(diagnostics.len(), 1);
    assert_has_diagnostic!(
        diagnostics,
        DiagnosticCode::MissingOtherInIcu,
        harness::span_of(&text, "g, select, male{x}")
    );
}

#[test]
fn unknown_types_are_not_descended() {
    let (_, diagnostics) = validate("{n, custom, other{{g, select, male{x}}}}");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, DiagnosticCode::UnknownIcuMessageType);
}

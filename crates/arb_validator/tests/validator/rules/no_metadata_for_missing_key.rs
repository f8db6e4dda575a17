use arb_validator::validators::NoMetadataForMissingKey;
use arb_validator::DiagnosticCode;

use crate::assert_has_diagnostic;
use crate::harness;

#[test]
fn metadata_with_message() {
    let text = "{\n  \"title\": \"Title\",\n  \"@title\": {}\n}";
    assert!(harness::validate_with(text, NoMetadataForMissingKey::new()).is_empty());
}

#[test]
fn metadata_without_message() {
    let text = "{\n  \"title\": \"Title\",\n  \"@subtitle\": {\"description\": \"x\"}\n}";
    let diagnostics = harness::validate_with(text, NoMetadataForMissingKey::new());
    assert_eq!(diagnostics.len(), 1);
    assert_has_diagnostic!(
        diagnostics,
        DiagnosticCode::MetadataForMissingKey,
        harness::span_of(text, "@subtitle")
    );
}

#[test]
fn metadata_before_message_is_matched() {
    let text = "{\n  \"@title\": {},\n  \"title\": \"Title\"\n}";
    assert!(harness::validate_with(text, NoMetadataForMissingKey::new()).is_empty());
}

#[test]
fn global_settings_are_not_metadata() {
    let text = "{\n  \"@@locale\": \"en\",\n  \"@@x-reference\": true\n}";
    assert!(harness::validate_with(text, NoMetadataForMissingKey::new()).is_empty());
}

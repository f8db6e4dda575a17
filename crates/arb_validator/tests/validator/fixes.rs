use arb_validator::{apply_fixes, quick_fix, validate, DiagnosticCode};

use crate::harness;

/// Apply the quick fix for the first diagnostic with `code` in `text`, returning the new text.
fn fix_first(text: &str, code: DiagnosticCode) -> Option<String> {
    let outcome = harness::parse_ok(text);
    let diagnostic = validate(&outcome)
        .into_iter()
        .find(|diagnostic| diagnostic.code == code)?;
    let fix = quick_fix(&outcome.messages, code, diagnostic.span)?;
    Some(apply_fixes(text, &[fix]))
}

#[test]
fn missing_metadata_insertion() {
    let text = "{\n  \"@@x-reference\": true,\n  \"title\": \"Title\"\n}";
    let outcome = harness::parse_ok(text);
    let span = harness::span_of(text, "title");
    let fix = quick_fix(&outcome.messages, DiagnosticCode::MissingMetadataForKey, span).unwrap();

    let after_value = harness::span_of(text, "\"Title\"").1;
    assert_eq!(fix.source_span, (after_value, after_value));
    assert_eq!(fix.replacement, ",\n  \"@title\": {}");
    assert_eq!(
        apply_fixes(text, &[fix]),
        "{\n  \"@@x-reference\": true,\n  \"title\": \"Title\",\n  \"@title\": {}\n}"
    );
}

#[test]
fn missing_metadata_uses_file_indentation() {
    let text = "{\n\t\"@@x-reference\": true,\n\t\"title\": \"Title\"\n}";
    assert_eq!(
        fix_first(text, DiagnosticCode::MissingMetadataForKey).unwrap(),
        "{\n\t\"@@x-reference\": true,\n\t\"title\": \"Title\",\n\t\"@title\": {}\n}"
    );

    let text = "{\n    \"@@x-reference\": true,\n    \"title\": \"Title\"\n}";
    assert_eq!(
        fix_first(text, DiagnosticCode::MissingMetadataForKey).unwrap(),
        "{\n    \"@@x-reference\": true,\n    \"title\": \"Title\",\n    \"@title\": {}\n}"
    );
}

#[test]
fn missing_metadata_fix_resolves_diagnostic() {
    let text = "{\n  \"@@x-reference\": true,\n  \"a\": \"A\",\n  \"b\": \"B\"\n}";
    let fixed = fix_first(text, DiagnosticCode::MissingMetadataForKey).unwrap();
    let diagnostics = validate(&harness::parse_ok(&fixed));
    assert_eq!(
        harness::count_code(&diagnostics, DiagnosticCode::MissingMetadataForKey),
        1
    );
    assert!(fixed.contains("\"a\": \"A\",\n  \"@a\": {},\n  \"b\""));
}

#[test]
fn placeholder_after_last_declaration() {
    let text = r#"{
  "greeting": "Hi {first} {last}",
  "@greeting": {
    "placeholders": {
      "first": {}
    }
  }
}"#;
    let expected = r#"{
  "greeting": "Hi {first} {last}",
  "@greeting": {
    "placeholders": {
      "first": {},
      "last": {}
    }
  }
}"#;
    assert_eq!(
        fix_first(text, DiagnosticCode::PlaceholderWithoutMetadata).unwrap(),
        expected
    );
}

#[test]
fn placeholder_into_empty_placeholders() {
    let text = r#"{
  "greeting": "Hi {name}",
  "@greeting": {
    "placeholders": {}
  }
}"#;
    let expected = r#"{
  "greeting": "Hi {name}",
  "@greeting": {
    "placeholders": {
      "name": {}
    }
  }
}"#;
    assert_eq!(
        fix_first(text, DiagnosticCode::PlaceholderWithoutMetadata).unwrap(),
        expected
    );
}

#[test]
fn placeholder_into_empty_placeholders_with_whitespace() {
    let text = r#"{
  "greeting": "Hi {name}",
  "@greeting": {
    "placeholders": {
    }
  }
}"#;
    let expected = r#"{
  "greeting": "Hi {name}",
  "@greeting": {
    "placeholders": {
      "name": {}
    }
  }
}"#;
    assert_eq!(
        fix_first(text, DiagnosticCode::PlaceholderWithoutMetadata).unwrap(),
        expected
    );
}

#[test]
fn placeholders_object_after_last_property() {
    let text = r#"{
  "greeting": "Hi {name}",
  "@greeting": {
    "description": "Greets"
  }
}"#;
    let expected = r#"{
  "greeting": "Hi {name}",
  "@greeting": {
    "description": "Greets",
    "placeholders": {
      "name": {}
    }
  }
}"#;
    assert_eq!(
        fix_first(text, DiagnosticCode::PlaceholderWithoutMetadata).unwrap(),
        expected
    );
}

#[test]
fn placeholders_object_into_empty_metadata() {
    let text = "{\n  \"greeting\": \"Hi {name}\",\n  \"@greeting\": {}\n}";
    let expected = r#"{
  "greeting": "Hi {name}",
  "@greeting": {
    "placeholders": {
      "name": {}
    }
  }
}"#;
    assert_eq!(
        fix_first(text, DiagnosticCode::PlaceholderWithoutMetadata).unwrap(),
        expected
    );
}

#[test]
fn complex_argument_can_be_declared() {
    let text = "{\n  \"items\": \"{count, plural, other{many}}\",\n  \"@items\": {}\n}";
    let fixed = fix_first(text, DiagnosticCode::PlaceholderWithoutMetadata).unwrap();
    let diagnostics = validate(&harness::parse_ok(&fixed));
    assert!(diagnostics.is_empty(), "{diagnostics:#?}");
}

#[test]
fn placeholder_without_any_metadata_has_no_fix() {
    let text = harness::single_message("greeting", "Hi {name}");
    assert_eq!(fix_first(&text, DiagnosticCode::PlaceholderWithoutMetadata), None);
}

#[test]
fn placeholder_fix_needs_a_placeholder() {
    let text = "{\n  \"greeting\": \"Hi {name}\",\n  \"@greeting\": {}\n}";
    let outcome = harness::parse_ok(text);
    let span = harness::span_of(text, "Hi ");
    assert_eq!(
        quick_fix(&outcome.messages, DiagnosticCode::PlaceholderWithoutMetadata, span),
        None
    );
}

#[test]
fn offsets_outside_any_message_have_no_fix() {
    let text = harness::single_message("title", "Title");
    let outcome = harness::parse_ok(&text);
    assert_eq!(
        quick_fix(&outcome.messages, DiagnosticCode::MissingMetadataForKey, (0, 0)),
        None
    );
}

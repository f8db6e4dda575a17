use crate::harness;
use arb_document::{parse, JsonSyntaxError, NodeRef};

#[test]
fn counts_messages_and_metadata() {
    let text = r#"{
  "@@locale": "en",
  "@@x-reference": true,
  "one": "One",
  "@one": {},
  "two": "Two",
  "@two": {"description": "Second"},
  "@orphan": {}
}"#;
    let outcome = harness::parse_ok(text);
    let messages = &outcome.messages;
    assert_eq!(messages.messages.len(), 2);
    assert_eq!(messages.metadata.len(), 3);
    assert!(messages.is_reference);
    assert_eq!(messages.locale.as_ref().map(|l| l.value.as_str()), Some("en"));
}

#[test]
fn reference_flag_defaults_to_false() {
    let outcome = harness::parse_ok(r#"{"@@x-reference": false, "a": "b"}"#);
    assert!(!outcome.messages.is_reference);
    let outcome = harness::parse_ok(r#"{"a": "b"}"#);
    assert!(!outcome.messages.is_reference);
}

#[test]
fn reserved_names_match_after_unescaping() {
    let text = r#"{
  "@@x-refer\u0065nce": true,
  "a": "{n}",
  "@a": {"pl\u0061ceholders": {"n": {}}}
}"#;
    let outcome = harness::parse_ok(text);
    assert!(outcome.messages.is_reference);
    let metadata = &outcome.messages.metadata[0].metadata;
    assert_eq!(metadata.placeholders.len(), 1);
    assert_eq!(metadata.placeholders[0].name(), "n");
}

#[test]
fn non_string_messages_are_skipped() {
    let outcome = harness::parse_ok(r#"{"a": 1, "b": {"c": "d"}, "e": ["f"], "g": "h"}"#);
    let keys: Vec<_> = outcome
        .messages
        .messages
        .iter()
        .map(|entry| entry.key.value())
        .collect();
    assert_eq!(keys, vec!["g"]);
}

#[test]
fn key_end_of_message_follows_closing_quote() {
    let text = "{\n  \"key\": \"value\",\n  \"next\": \"x\"\n}";
    let outcome = harness::parse_ok(text);
    let key = &outcome.messages.messages[0].key;
    let end = key.end_of_message.unwrap();
    assert_eq!(&text[end - 1..end + 1], "\",");
}

#[test]
fn indentation_is_sniffed() {
    let outcome = harness::parse_ok("{\n    \"a\": \"b\"\n}");
    assert_eq!(outcome.messages.indentation_count, 4);
    assert_eq!(outcome.messages.indentation_character, ' ');
    assert_eq!(outcome.messages.indentation(2), " ".repeat(8));

    let outcome = harness::parse_ok("{\n\t\"a\": \"b\"\n}");
    assert_eq!(outcome.messages.indentation(1), "\t");

    let outcome = harness::parse_ok(r#"{"a": "b"}"#);
    assert_eq!(outcome.messages.indentation(1), "  ");
}

#[test]
fn metadata_lookup_uses_first_match() {
    let text = r#"{
  "a": "{x}",
  "@a": {"placeholders": {"x": {}}},
  "@a": {}
}"#;
    let outcome = harness::parse_ok(text);
    let messages = &outcome.messages;
    let entry = &messages.messages[0];
    let metadata = messages.metadata_for(entry).unwrap();
    assert_eq!(metadata.metadata.placeholders.len(), 1);
    assert_eq!(
        messages.message_for_metadata(&messages.metadata[1]).map(|e| e.key.value()),
        Some("a")
    );
    assert!(messages.metadata_for_key("missing").is_none());
}

#[test]
fn node_lookup_by_offset() {
    let text = r#"{"greet": "Hi {name}, {n, plural, one{x} other{y}}"}"#;
    let outcome = harness::parse_ok(text);
    let messages = &outcome.messages;

    let (entry, node) = messages.node_at(text.find("name").unwrap()).unwrap();
    assert_eq!(entry.key.value(), "greet");
    assert!(matches!(node, NodeRef::Placeholder(literal) if literal.value == "name"));
    assert!(node.is_placeholder());

    let (_, node) = messages.node_at(text.find("greet").unwrap()).unwrap();
    assert!(matches!(node, NodeRef::Key(_)));

    let (_, node) = messages.node_at(text.find("plural").unwrap()).unwrap();
    assert!(matches!(node, NodeRef::ComplexType(_)));

    let (_, node) = messages.node_at(text.find("other").unwrap()).unwrap();
    assert!(matches!(node, NodeRef::CaseLabel(literal) if literal.value == "other"));

    let (_, node) = messages.node_at(text.find("{n,").unwrap() + 1).unwrap();
    assert!(matches!(node, NodeRef::Argument(_)));

    assert!(messages.entry_at(0).is_none());
}

#[test]
fn syntax_errors_keep_partial_model() {
    let outcome = parse("{\n  \"a\": \"b\",\n  // comment\n  \"c\": \"d\"\n}");
    assert!(outcome.syntax_error.is_some());
    assert_eq!(outcome.messages.messages.len(), 1);
}

#[test]
fn deeply_nested_metadata_is_a_syntax_error() {
    let nested = format!("{}{}", "[".repeat(1000), "]".repeat(1000));
    let text = format!("{{\n  \"a\": \"A\",\n  \"@a\": {{\"x\": {nested}}}\n}}");
    let outcome = parse(&text);
    assert!(matches!(
        outcome.syntax_error,
        Some(JsonSyntaxError::NestingTooDeep { .. })
    ));
    assert_eq!(outcome.messages.messages.len(), 1);
}

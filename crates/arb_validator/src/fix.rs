use arb_document::{MessageList, TextRange};
use serde::Serialize;

use crate::diagnostic::DiagnosticCode;

/// A single text edit against the document. Insertions have an empty `source_span`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticFix {
    pub message: Option<String>,
    pub source_span: TextRange,
    pub replacement: String,
}

impl DiagnosticFix {
    pub fn replace_text(source_span: TextRange, replacement: &str) -> Self {
        DiagnosticFix {
            message: None,
            source_span,
            replacement: replacement.into(),
        }
    }

    pub fn insert_text(start: usize, new_text: &str) -> Self {
        DiagnosticFix {
            message: None,
            source_span: (start, start),
            replacement: new_text.into(),
        }
    }

    pub fn with_suggestion(mut self, message: &str) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Apply every fix to `text` at once. Fixes are expected not to overlap; any fix that starts
/// before the end of a previously applied one is skipped.
pub fn apply_fixes(text: &str, fixes: &[DiagnosticFix]) -> String {
    let mut sorted_fixes = fixes.iter().collect::<Vec<_>>();
    sorted_fixes.sort_by_key(|fix| fix.source_span);
    let added_length: usize = fixes.iter().map(|fix| fix.replacement.len()).sum();

    let mut result = String::with_capacity(text.len() + added_length);
    let mut current_offset = 0;
    for fix in sorted_fixes {
        let (start, end) = fix.source_span;
        if start < current_offset || end > text.len() {
            tracing::debug!(start, end, "skipping overlapping or out of bounds fix");
            continue;
        }
        result.push_str(&text[current_offset..start]);
        result.push_str(&fix.replacement);
        current_offset = end;
    }
    result.push_str(&text[current_offset..]);
    result
}

/// Compute the edit that resolves the diagnostic `code` reported at `span`, if one exists.
/// Only `missingMetadataForKey` and `placeholderWithoutMetadata` can be fixed automatically.
pub fn quick_fix(
    list: &MessageList,
    code: DiagnosticCode,
    span: TextRange,
) -> Option<DiagnosticFix> {
    match code {
        DiagnosticCode::MissingMetadataForKey => missing_metadata_fix(list, span),
        DiagnosticCode::PlaceholderWithoutMetadata => placeholder_metadata_fix(list, span),
        _ => None,
    }
}

fn missing_metadata_fix(list: &MessageList, (start, _): TextRange) -> Option<DiagnosticFix> {
    let entry = list.entry_at(start)?;
    let end_of_message = entry.key.end_of_message?;
    let insertion = format!(",\n{}\"{}\": {{}}", list.indentation(1), entry.metadata_key());
    Some(
        DiagnosticFix::insert_text(end_of_message, &insertion)
            .with_suggestion("Add metadata for key"),
    )
}

fn placeholder_metadata_fix(list: &MessageList, (start, _): TextRange) -> Option<DiagnosticFix> {
    let (entry, node) = list.node_at(start)?;
    if !node.is_placeholder() {
        return None;
    }
    let name = &node.literal().value;
    let metadata = &list.metadata_for(entry)?.metadata;

    let (outer, inner, innermost) = (
        list.indentation(1),
        list.indentation(2),
        list.indentation(3),
    );
    let declaration = format!("\"{name}\": {{}}");
    let fix = if let Some(last_placeholder_end) = metadata.last_placeholder_end {
        DiagnosticFix::insert_text(
            last_placeholder_end,
            &format!(",\n{innermost}{declaration}"),
        )
    } else if let Some(body_start) = metadata.placeholders_body_start {
        // Whatever whitespace sits inside of the empty object is replaced.
        let body_end = metadata.placeholders_body_end.unwrap_or(body_start);
        DiagnosticFix::replace_text(
            (body_start, body_end),
            &format!("\n{innermost}{declaration}\n{inner}"),
        )
    } else {
        let placeholders = format!("\"placeholders\": {{\n{innermost}{declaration}\n{inner}}}");
        match metadata.last_property_end {
            Some(last_property_end) => DiagnosticFix::insert_text(
                last_property_end,
                &format!(",\n{inner}{placeholders}"),
            ),
            None => DiagnosticFix::insert_text(
                metadata.metadata_start,
                &format!("\n{inner}{placeholders}\n{outer}"),
            ),
        }
    };
    Some(fix.with_suggestion("Add placeholder to metadata"))
}

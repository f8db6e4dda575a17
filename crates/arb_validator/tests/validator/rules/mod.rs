mod mismatched_brackets;
mod no_metadata_for_missing_key;
mod no_unused_placeholder_metadata;
mod valid_complex_messages;
mod valid_placeholders;

pub use mismatched_brackets::MismatchedBrackets;
pub use no_metadata_for_missing_key::NoMetadataForMissingKey;
pub use no_unused_placeholder_metadata::NoUnusedPlaceholderMetadata;
pub use valid_complex_messages::ValidComplexMessages;
pub use valid_keys::ValidKeys;
pub use valid_placeholders::ValidPlaceholders;

mod mismatched_brackets;
mod no_metadata_for_missing_key;
mod no_unused_placeholder_metadata;
mod valid_complex_messages;
mod valid_keys;
mod valid_placeholders;

pub mod validator;

use std::time::Duration;

use arb_document::{ParseOptions, ARB_ESCAPE_CHARACTER};
use arb_validator::ValidatorOptions;
use serde::{Deserialize, Serialize};

use crate::error::ServiceResult;

/// Host-provided settings. Every field is optional in the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Delay between the last edit of a document and its reanalysis.
    pub debounce_ms: u64,
    pub escape_character: char,
    /// Report messages without metadata in reference files.
    pub report_missing_metadata: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            escape_character: ARB_ESCAPE_CHARACTER,
            report_missing_metadata: true,
        }
    }
}

impl EditorConfig {
    pub fn from_json(content: &str) -> ServiceResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            escape_character: self.escape_character,
        }
    }

    pub fn validator_options(&self) -> ValidatorOptions {
        ValidatorOptions {
            report_missing_metadata: self.report_missing_metadata,
        }
    }
}

use std::fmt::Formatter;

use arb_document::TextRange;
use serde::{Serialize, Serializer};

use crate::DiagnosticSeverity;

/// The closed set of problems the validator can report. The string forms are stable and are used
/// by hosts to request quick fixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DiagnosticCode {
    MismatchedBrackets,
    MetadataForMissingKey,
    InvalidKey,
    MissingMetadataForKey,
    InvalidPlaceholder,
    MissingOtherInIcu,
    UnknownIcuMessageType,
    PlaceholderWithoutMetadata,
    MissingPlaceholderWithMetadata,
}

impl DiagnosticCode {
    pub const ALL: [DiagnosticCode; 9] = [
        DiagnosticCode::MismatchedBrackets,
        DiagnosticCode::MetadataForMissingKey,
        DiagnosticCode::InvalidKey,
        DiagnosticCode::MissingMetadataForKey,
        DiagnosticCode::InvalidPlaceholder,
        DiagnosticCode::MissingOtherInIcu,
        DiagnosticCode::UnknownIcuMessageType,
        DiagnosticCode::PlaceholderWithoutMetadata,
        DiagnosticCode::MissingPlaceholderWithMetadata,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::MismatchedBrackets => "mismatchedBrackets",
            DiagnosticCode::MetadataForMissingKey => "metadataForMissingKey",
            DiagnosticCode::InvalidKey => "invalidKey",
            DiagnosticCode::MissingMetadataForKey => "missingMetadataForKey",
            DiagnosticCode::InvalidPlaceholder => "invalidPlaceholder",
            DiagnosticCode::MissingOtherInIcu => "missingOtherInICU",
            DiagnosticCode::UnknownIcuMessageType => "unknownICUMessageType",
            DiagnosticCode::PlaceholderWithoutMetadata => "placeholderWithoutMetadata",
            DiagnosticCode::MissingPlaceholderWithMetadata => "missingPlaceholderWithMetadata",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.as_str() == code)
    }
}

impl Serialize for DiagnosticCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub span: TextRange,
    pub severity: DiagnosticSeverity,
    pub message: String,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn new(
        code: DiagnosticCode,
        severity: DiagnosticSeverity,
        span: TextRange,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            span,
            severity,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}

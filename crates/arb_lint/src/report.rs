use std::fmt::Write;
use std::path::{Path, PathBuf};

use arb_document::LineColumn;
use arb_editor_service::Analysis;
use arb_validator::{DiagnosticCode, DiagnosticSeverity};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedDiagnostic {
    pub code: DiagnosticCode,
    pub severity: DiagnosticSeverity,
    pub message: String,
    pub help: Option<String>,
    pub span: (usize, usize),
    pub start: LineColumn,
    pub end: LineColumn,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntaxErrorReport {
    pub message: String,
    pub offset: usize,
    pub position: LineColumn,
}

/// Everything reported for a single file, with positions resolved for display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: PathBuf,
    pub syntax_error: Option<SyntaxErrorReport>,
    pub diagnostics: Vec<ReportedDiagnostic>,
    /// Number of quick fixes written back to the file.
    pub fixed: usize,
}

impl FileReport {
    pub fn new(path: &Path, analysis: &Analysis) -> Self {
        let line_index = analysis.line_index();
        let syntax_error = analysis
            .outcome
            .syntax_error
            .as_ref()
            .map(|error| SyntaxErrorReport {
                message: error.to_string(),
                offset: error.offset(),
                position: line_index.line_column(error.offset()),
            });
        let diagnostics = analysis
            .diagnostics
            .iter()
            .map(|diagnostic| ReportedDiagnostic {
                code: diagnostic.code,
                severity: diagnostic.severity,
                message: diagnostic.message.clone(),
                help: diagnostic.help.clone(),
                span: diagnostic.span,
                start: line_index.line_column(diagnostic.span.0),
                end: line_index.line_column(diagnostic.span.1),
            })
            .collect();
        Self {
            path: path.to_path_buf(),
            syntax_error,
            diagnostics,
            fixed: 0,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.syntax_error.is_some()
            || self
                .diagnostics
                .iter()
                .any(|diagnostic| diagnostic.severity == DiagnosticSeverity::Error)
    }

    /// Render as `path:line:column: severity[code]: message` lines, one-based like most compilers.
    pub fn render_text(&self) -> String {
        let path = self.path.display();
        let mut output = String::new();
        if let Some(error) = &self.syntax_error {
            let _ = writeln!(
                output,
                "{path}:{}:{}: error[syntax]: {}",
                error.position.line + 1,
                error.position.column + 1,
                error.message
            );
        }
        for diagnostic in &self.diagnostics {
            let _ = writeln!(
                output,
                "{path}:{}:{}: {}[{}]: {}",
                diagnostic.start.line + 1,
                diagnostic.start.column + 1,
                diagnostic.severity,
                diagnostic.code,
                diagnostic.message
            );
            if let Some(help) = &diagnostic.help {
                let _ = writeln!(output, "  = help: {help}");
            }
        }
        if self.fixed > 0 {
            let _ = writeln!(output, "{path}: applied {} fix(es)", self.fixed);
        }
        output
    }
}

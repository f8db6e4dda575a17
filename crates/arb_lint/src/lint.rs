use arb_editor_service::{Analysis, EditorConfig};
use arb_validator::{apply_fixes, DiagnosticFix};
use rustc_hash::FxHashSet;

/// Fixes can uncover new fixable problems, like placeholders of a message whose metadata was only
/// just added, so fixing repeats until nothing changes, up to this many times.
pub const MAX_FIX_ROUNDS: usize = 10;

pub struct FixOutcome {
    pub text: String,
    pub applied: usize,
}

pub fn lint_text(text: &str, config: &EditorConfig) -> Analysis {
    Analysis::new(text.to_string(), config)
}

/// The fixes to apply in one round. Only one fix is kept per insertion point, since fixes that
/// insert into the same place each expect to be the only change there.
fn collect_fixes(analysis: &Analysis) -> Vec<DiagnosticFix> {
    let mut offsets = FxHashSet::default();
    analysis
        .diagnostics
        .iter()
        .filter_map(|diagnostic| analysis.quick_fix(diagnostic.code, diagnostic.span))
        .filter(|fix| offsets.insert(fix.source_span))
        .collect()
}

pub fn fix_text(text: &str, config: &EditorConfig) -> FixOutcome {
    let mut text = text.to_string();
    let mut applied = 0;
    for round in 0..MAX_FIX_ROUNDS {
        let analysis = lint_text(&text, config);
        if analysis.outcome.syntax_error.is_some() {
            break;
        }
        let fixes = collect_fixes(&analysis);
        if fixes.is_empty() {
            break;
        }
        tracing::debug!(round, fixes = fixes.len(), "applying fixes");
        text = apply_fixes(&text, &fixes);
        applied += fixes.len();
    }
    FixOutcome { text, applied }
}

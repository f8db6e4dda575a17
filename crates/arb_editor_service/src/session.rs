//! Analysis state for open documents.
//!
//! Everything here is single-threaded. Each document owns one immutable [`Analysis`] snapshot,
//! shared with consumers through an `Rc`, and at most one pending reanalysis. Edits replace the
//! pending job and push its deadline back, so a burst of edits is only analyzed once. Time is
//! always passed in by the caller, which owns the actual timers.
use std::rc::Rc;
use std::time::Instant;

use arb_document::{parse_with_options, LineIndex, ParseOutcome, TextRange};
use arb_validator::{quick_fix, validate_with_options, Diagnostic, DiagnosticCode, DiagnosticFix};
use rustc_hash::FxHashMap;

use crate::config::EditorConfig;
use crate::decorations::{decorate, Decorations};
use crate::error::{ServiceError, ServiceResult};

/// The result of one complete pass over a document's text.
#[derive(Debug)]
pub struct Analysis {
    pub text: String,
    pub outcome: ParseOutcome,
    pub diagnostics: Vec<Diagnostic>,
    pub decorations: Decorations,
}

impl Analysis {
    pub fn new(text: String, config: &EditorConfig) -> Self {
        let outcome = parse_with_options(&text, config.parse_options());
        let diagnostics = validate_with_options(&outcome, config.validator_options());
        let decorations = decorate(&outcome.messages);
        Self {
            text,
            outcome,
            diagnostics,
            decorations,
        }
    }

    pub fn line_index(&self) -> LineIndex<'_> {
        LineIndex::new(&self.text)
    }

    pub fn quick_fix(&self, code: DiagnosticCode, span: TextRange) -> Option<DiagnosticFix> {
        quick_fix(&self.outcome.messages, code, span)
    }
}

#[derive(Debug)]
struct PendingAnalysis {
    text: String,
    due: Instant,
}

#[derive(Debug)]
pub struct DocumentSession {
    config: EditorConfig,
    snapshot: Rc<Analysis>,
    pending: Option<PendingAnalysis>,
}

impl DocumentSession {
    /// Open a document, analyzing its initial text immediately.
    pub fn open(text: impl Into<String>, config: EditorConfig) -> Self {
        let snapshot = Rc::new(Analysis::new(text.into(), &config));
        Self {
            config,
            snapshot,
            pending: None,
        }
    }

    /// The most recently completed analysis. Pending edits are not reflected until they run.
    pub fn snapshot(&self) -> Rc<Analysis> {
        Rc::clone(&self.snapshot)
    }

    /// Schedule a reanalysis of `text`, replacing any job that hasn't run yet.
    pub fn edit(&mut self, text: impl Into<String>, now: Instant) {
        if self.pending.is_some() {
            tracing::trace!("replacing pending analysis");
        }
        self.pending = Some(PendingAnalysis {
            text: text.into(),
            due: now + self.config.debounce(),
        });
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.due)
    }

    /// Run the pending job if it is due. Returns whether the snapshot was replaced.
    pub fn poll(&mut self, now: Instant) -> bool {
        match &self.pending {
            Some(pending) if pending.due <= now => self.flush(),
            _ => false,
        }
    }

    /// Run the pending job immediately, regardless of its deadline.
    pub fn flush(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        self.snapshot = Rc::new(Analysis::new(pending.text, &self.config));
        tracing::debug!(
            diagnostics = self.snapshot.diagnostics.len(),
            "reanalyzed document"
        );
        true
    }

    /// Apply a new configuration, reanalyzing the latest known text right away.
    pub fn reconfigure(&mut self, config: EditorConfig) {
        self.config = config;
        let text = match self.pending.take() {
            Some(pending) => pending.text,
            None => self.snapshot.text.clone(),
        };
        self.snapshot = Rc::new(Analysis::new(text, &self.config));
    }
}

/// All documents open in a host, keyed by the host's document identifiers.
#[derive(Debug, Default)]
pub struct Workspace {
    config: EditorConfig,
    documents: FxHashMap<String, DocumentSession>,
}

impl Workspace {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            documents: FxHashMap::default(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn open(&mut self, id: &str, text: impl Into<String>) -> ServiceResult<Rc<Analysis>> {
        if self.documents.contains_key(id) {
            return Err(ServiceError::AlreadyOpen(id.into()));
        }
        tracing::debug!(document = id, "opening document");
        let session = DocumentSession::open(text, self.config.clone());
        let snapshot = session.snapshot();
        self.documents.insert(id.into(), session);
        Ok(snapshot)
    }

    pub fn close(&mut self, id: &str) -> ServiceResult<()> {
        self.documents
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ServiceError::UnknownDocument(id.into()))
    }

    pub fn edit(&mut self, id: &str, text: impl Into<String>, now: Instant) -> ServiceResult<()> {
        self.session_mut(id)?.edit(text, now);
        Ok(())
    }

    pub fn snapshot(&self, id: &str) -> ServiceResult<Rc<Analysis>> {
        Ok(self.session(id)?.snapshot())
    }

    /// Run every job that is due. Returns the ids of the documents that were reanalyzed.
    pub fn poll(&mut self, now: Instant) -> Vec<String> {
        let mut updated = vec![];
        for (id, session) in self.documents.iter_mut() {
            if session.poll(now) {
                updated.push(id.clone());
            }
        }
        updated.sort();
        updated
    }

    /// The earliest time at which [`Workspace::poll`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.documents
            .values()
            .filter_map(DocumentSession::next_deadline)
            .min()
    }

    pub fn reconfigure(&mut self, config: EditorConfig) {
        for session in self.documents.values_mut() {
            session.reconfigure(config.clone());
        }
        self.config = config;
    }

    /// Compute the quick fix for a diagnostic reported by the host, identified by its serialized
    /// `code`. Codes without a fix, unknown codes, and spans that no longer resolve give `None`.
    pub fn code_action(
        &self,
        id: &str,
        code: &str,
        span: TextRange,
    ) -> ServiceResult<Option<DiagnosticFix>> {
        let snapshot = self.snapshot(id)?;
        if span.0 > span.1 || span.1 > snapshot.text.len() {
            return Err(ServiceError::SpanOutOfBounds {
                document: id.into(),
                start: span.0,
                end: span.1,
            });
        }
        let Some(code) = DiagnosticCode::from_code(code) else {
            tracing::debug!(code, "code action requested for an unknown diagnostic code");
            return Ok(None);
        };
        Ok(snapshot.quick_fix(code, span))
    }

    fn session(&self, id: &str) -> ServiceResult<&DocumentSession> {
        self.documents
            .get(id)
            .ok_or_else(|| ServiceError::UnknownDocument(id.into()))
    }

    fn session_mut(&mut self, id: &str) -> ServiceResult<&mut DocumentSession> {
        self.documents
            .get_mut(id)
            .ok_or_else(|| ServiceError::UnknownDocument(id.into()))
    }
}

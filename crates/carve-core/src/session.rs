//! Session orchestration.
//!
//! One `Session` owns everything mutable: the document, the settings,
//! the cached syntax and match spans, the clipboard, and the event log.
//! Every operation runs synchronously on the caller's thread; there is
//! no shared state and no background work. A failing operation aborts
//! locally and leaves the document and history untouched.

use std::ops::Range;
use std::path::Path;

use carve_syntax::{Highlighter, Span};

use crate::document::{normalize_extension, Document};
use crate::event_log::EventLog;
use crate::settings::Settings;
use crate::SessionResult;

/// A single editing session: one document, one settings record.
pub struct Session {
    /// The document being edited
    document: Document,

    /// Active settings (font, colors, highlight overrides)
    settings: Settings,

    /// Highlighter for the document's extension, if any rules apply
    highlighter: Option<&'static Highlighter>,

    /// Syntax spans from the last highlight pass
    syntax_spans: Vec<Span>,

    /// Match spans from the last find
    match_spans: Vec<Span>,

    /// Cut clipboard
    clipboard: String,

    /// Session event log, if attached
    event_log: Option<EventLog>,

    /// Whether the session has been asked to quit
    should_quit: bool,
}

impl Session {
    /// Creates a session with an empty document.
    pub fn new(settings: Settings) -> Self {
        Self {
            document: Document::new(),
            settings,
            highlighter: None,
            syntax_spans: Vec::new(),
            match_spans: Vec::new(),
            clipboard: String::new(),
            event_log: None,
            should_quit: false,
        }
    }

    /// Attaches the session event log and records the start event.
    pub fn attach_event_log(&mut self, log: EventLog) -> SessionResult<()> {
        self.event_log = Some(log);
        self.log_event("Application started")
    }

    fn log_event(&mut self, event: &str) -> SessionResult<()> {
        if let Some(log) = &mut self.event_log {
            log.record(event)?;
        }
        Ok(())
    }

    // ==================== File Operations ====================

    /// Resets to an empty, pathless document.
    ///
    /// Unsaved edits are discarded without confirmation; that is the
    /// session's contract, and the caller owns any prompting.
    pub fn new_document(&mut self) -> SessionResult<()> {
        self.document = Document::new();
        self.highlighter = None;
        self.syntax_spans.clear();
        self.match_spans.clear();
        self.log_event("Opened new file")
    }

    /// Replaces the document with the contents of `path`.
    ///
    /// On read failure the current document, history, and spans are
    /// left exactly as they were.
    pub fn open(&mut self, path: impl AsRef<Path>) -> SessionResult<()> {
        let path = path.as_ref();
        let document = Document::from_file(path)?;

        self.document = document;
        self.match_spans.clear();
        self.select_rules();
        self.rehighlight();
        self.log_event(&format!("Opened file: {}", path.display()))
    }

    /// Writes the document to its current path.
    ///
    /// Fails with [`SessionError::NoFilePath`] when the document has
    /// never been saved; the caller resolves a path (e.g. via a picker)
    /// and retries with [`Session::save_as`].
    pub fn save(&mut self) -> SessionResult<()> {
        self.document.save_to_current_path()?;
        let event = format!(
            "Saved file: {}",
            self.document.path().map(|p| p.display().to_string()).unwrap_or_default()
        );
        self.log_event(&event)
    }

    /// Writes the document to `path` and adopts it as the current path.
    ///
    /// An unrecognized extension gets the fallback suffix appended
    /// before writing; the stored path is the normalized one.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> SessionResult<()> {
        let path = normalize_extension(path.as_ref());
        self.document.save_to(&path)?;
        self.select_rules();
        self.rehighlight();
        self.log_event(&format!("Saved file: {}", path.display()))
    }

    // ==================== Editing ====================

    /// Inserts text at a character index, capturing an undo snapshot.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> SessionResult<()> {
        self.document.buffer_mut().insert(char_idx, text)?;
        self.rehighlight();
        Ok(())
    }

    /// Deletes a character range, returning the removed text.
    pub fn delete(&mut self, range: Range<usize>) -> SessionResult<String> {
        let removed = self.document.buffer_mut().delete(range)?;
        self.rehighlight();
        Ok(removed)
    }

    /// Cuts a character range into the session clipboard.
    pub fn cut(&mut self, range: Range<usize>) -> SessionResult<()> {
        let removed = self.delete(range)?;
        self.clipboard = removed;
        Ok(())
    }

    /// Undoes the last edit. Returns false (silently) when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        let changed = self.document.buffer_mut().undo();
        if changed {
            self.rehighlight();
        }
        changed
    }

    /// Redoes the last undone edit. Returns false when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let changed = self.document.buffer_mut().redo();
        if changed {
            self.rehighlight();
        }
        changed
    }

    // ==================== Find & Highlight ====================

    /// Scans the document for literal occurrences of `needle`.
    ///
    /// Previous match spans are discarded before the scan. Returns the
    /// match count for UI feedback; zero matches and an empty needle
    /// are ordinary outcomes, not errors.
    pub fn find(&mut self, needle: &str) -> usize {
        self.match_spans = carve_syntax::find(&self.document.text(), needle);
        tracing::info!(needle, count = self.match_spans.len(), "find");
        self.match_spans.len()
    }

    /// Recomputes syntax spans with a full document re-scan.
    pub fn rehighlight(&mut self) {
        self.syntax_spans = match self.highlighter {
            Some(highlighter) => highlighter.highlight(
                &self.document.text(),
                &self.settings.syntax_highlighting_colors,
            ),
            // No rules for this extension: plain text, zero spans.
            None => Vec::new(),
        };
    }

    /// Re-selects the rule set for the document's current extension.
    fn select_rules(&mut self) {
        self.highlighter = self
            .document
            .extension()
            .and_then(|ext| Highlighter::for_extension(&ext));
    }

    // ==================== Settings ====================

    /// Replaces the settings and recomputes highlighting, since color
    /// overrides may have changed.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.rehighlight();
    }

    /// Returns the active settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ==================== Lifecycle ====================

    /// Signals that the session should end and records the stop event.
    pub fn quit(&mut self) -> SessionResult<()> {
        self.should_quit = true;
        self.log_event("Application stopped")
    }

    /// Returns true once [`Session::quit`] has been called.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ==================== Accessors ====================

    /// Returns the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the syntax spans from the last highlight pass.
    pub fn syntax_spans(&self) -> &[Span] {
        &self.syntax_spans
    }

    /// Returns the match spans from the last find.
    pub fn match_spans(&self) -> &[Span] {
        &self.match_spans
    }

    /// Returns the clipboard content from the last cut.
    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }
}

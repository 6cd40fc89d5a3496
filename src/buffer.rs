//! Text buffer accessor used by trigger detection and selection.
//!
//! Provides `TextBuffer` (read-only) and `TextBufferMut` (read-write) traits so
//! the suggest engine never depends on a concrete editor buffer, plus a
//! rope-backed `Document` implementation that records origin-tagged edits.

use ropey::Rope;
use std::borrow::Cow;

/// A position in the document (line and character column, both 0-indexed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number in characters (0-indexed)
    pub column: usize,
}

impl Position {
    /// Create a new position
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Read-only view into a text buffer.
pub trait TextBuffer {
    /// Number of lines (always >= 1)
    fn line_count(&self) -> usize;

    /// Get line content (without trailing newline)
    fn line(&self, line: usize) -> Option<Cow<'_, str>>;

    /// Length of a specific line in characters (excluding newline)
    fn line_length(&self, line: usize) -> usize {
        self.line(line).map(|l| l.chars().count()).unwrap_or(0)
    }
}

/// Plain line slices, for hosts that hand over lines rather than a buffer
impl<S: AsRef<str>> TextBuffer for [S] {
    fn line_count(&self) -> usize {
        self.len().max(1)
    }

    fn line(&self, line: usize) -> Option<Cow<'_, str>> {
        self.get(line).map(|l| Cow::Borrowed(l.as_ref()))
    }
}

/// Mutable buffer operations. Extends TextBuffer.
pub trait TextBufferMut: TextBuffer {
    /// Replace the text between `start` and `end` with `text`.
    ///
    /// `origin` tags the edit so hosts can tell autocomplete edits apart from
    /// typing (e.g. for undo grouping). Positions past the end of a line or of
    /// the document are clamped.
    fn replace_range(&mut self, text: &str, start: Position, end: Position, origin: &str);
}

/// A recorded replacement, kept for undo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOperation {
    /// Tag supplied by the caller of `replace_range`
    pub origin: String,
    /// Character offset where the edit starts
    pub position: usize,
    pub deleted_text: String,
    pub inserted_text: String,
}

/// Rope-backed document used by the CLI and the tests
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Undo stack
    pub undo_stack: Vec<EditOperation>,
    /// Document revision counter (incremented on each edit)
    pub revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from_str(text),
            undo_stack: Vec::new(),
            revision: 0,
        }
    }

    /// Load a document from a file path
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::with_text(&content))
    }

    /// Full content as String
    pub fn content(&self) -> String {
        self.buffer.to_string()
    }

    /// Convert (line, column) to a character offset, clamping both
    pub fn position_to_offset(&self, pos: Position) -> usize {
        if pos.line >= self.buffer.len_lines() {
            return self.buffer.len_chars();
        }
        let line_start = self.buffer.line_to_char(pos.line);
        line_start + pos.column.min(self.line_length(pos.line))
    }

    /// Revert the most recent edit. Returns the reverted operation.
    pub fn undo(&mut self) -> Option<EditOperation> {
        let op = self.undo_stack.pop()?;
        let inserted_len = op.inserted_text.chars().count();
        self.buffer.remove(op.position..op.position + inserted_len);
        self.buffer.insert(op.position, &op.deleted_text);
        self.revision += 1;
        tracing::debug!(origin = %op.origin, revision = self.revision, "undo");
        Some(op)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer for Document {
    fn line_count(&self) -> usize {
        self.buffer.len_lines().max(1)
    }

    fn line(&self, line: usize) -> Option<Cow<'_, str>> {
        if line >= self.buffer.len_lines() {
            return None;
        }
        let s = self.buffer.line(line).to_string();
        // Strip trailing newline
        let trimmed = s.trim_end_matches(&['\n', '\r'][..]).to_string();
        Some(Cow::Owned(trimmed))
    }
}

impl TextBufferMut for Document {
    fn replace_range(&mut self, text: &str, start: Position, end: Position, origin: &str) {
        let (start, end) = if end < start { (end, start) } else { (start, end) };
        let start_offset = self.position_to_offset(start);
        let end_offset = self.position_to_offset(end);

        let deleted_text = self.buffer.slice(start_offset..end_offset).to_string();
        if start_offset < end_offset {
            self.buffer.remove(start_offset..end_offset);
        }
        self.buffer.insert(start_offset, text);
        self.revision += 1;

        tracing::debug!(
            origin,
            line = start.line,
            column = start.column,
            deleted = deleted_text.len(),
            inserted = text.len(),
            "replace_range"
        );

        self.undo_stack.push(EditOperation {
            origin: origin.to_string(),
            position: start_offset,
            deleted_text,
            inserted_text: text.to_string(),
        });
    }
}

//! Document management.
//!
//! A document is the one text buffer a session edits, together with its
//! optional file path. No path means an unsaved new document. The
//! extension derived from the path drives rule-set selection.

use std::path::{Path, PathBuf};

use carve_buffer::TextBuffer;
use carve_syntax::{FALLBACK_EXTENSION, RECOGNIZED_EXTENSIONS};

use crate::SessionResult;

/// A single file or unsaved buffer being edited.
#[derive(Debug)]
pub struct Document {
    /// The underlying text buffer
    buffer: TextBuffer,

    /// File path (None for an unsaved new document)
    path: Option<PathBuf>,

    /// Display name
    name: String,
}

impl Document {
    /// Creates a new empty, pathless document.
    pub fn new() -> Self {
        Self {
            buffer: TextBuffer::new(),
            path: None,
            name: "Untitled".to_string(),
        }
    }

    /// Opens a document from a file.
    ///
    /// Read failure surfaces as an IO error and leaves no partial
    /// state behind; the caller's current document is untouched.
    pub fn from_file(path: impl AsRef<Path>) -> SessionResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        Ok(Self {
            buffer: TextBuffer::from(content),
            path: Some(path.to_path_buf()),
            name: display_name(path),
        })
    }

    /// Writes the document to its current path.
    ///
    /// The buffer stays in memory unchanged if the write fails.
    pub fn save_to_current_path(&mut self) -> SessionResult<()> {
        let path = self.path.clone().ok_or(crate::SessionError::NoFilePath)?;
        std::fs::write(&path, self.buffer.text().as_bytes())?;
        self.buffer.mark_saved();
        Ok(())
    }

    /// Writes the document to `path` (already normalized) and adopts it
    /// as the current path.
    pub fn save_to(&mut self, path: &Path) -> SessionResult<()> {
        std::fs::write(path, self.buffer.text().as_bytes())?;
        self.path = Some(path.to_path_buf());
        self.name = display_name(path);
        self.buffer.mark_saved();
        Ok(())
    }

    /// Returns the file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lowercased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        self.path
            .as_deref()
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }

    /// Returns the full text.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        self.buffer.text()
    }

    /// Returns the text buffer.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Returns a mutable reference to the buffer.
    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    /// Returns true if the document has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.buffer.is_modified()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("Unknown")
        .to_string()
}

/// Normalizes a save path's extension.
///
/// A path whose extension is outside the recognized set gets the
/// fallback suffix appended, never rejected: `notes` becomes `notes.c`
/// and `notes.md` becomes `notes.md.c`; `notes.txt` is kept as is.
pub fn normalize_extension(path: &Path) -> PathBuf {
    let recognized = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| RECOGNIZED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false);

    if recognized {
        path.to_path_buf()
    } else {
        let mut with_suffix = path.as_os_str().to_os_string();
        with_suffix.push(format!(".{FALLBACK_EXTENSION}"));
        PathBuf::from(with_suffix)
    }
}

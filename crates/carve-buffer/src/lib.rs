//! # Carve Buffer
//!
//! Text buffer for the carve editor: a rope-backed character sequence
//! with whole-snapshot undo/redo history.
//!
//! The buffer knows nothing about files, highlighting, or settings;
//! those live in `carve-core`. All offsets are character indices from
//! the start of the buffer.

mod buffer;
mod history;

pub use buffer::TextBuffer;
pub use history::{History, DEFAULT_DEPTH};

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur during buffer operations
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("Invalid character index: {0}")]
    InvalidCharIndex(usize),

    #[error("Line {0} is out of bounds")]
    LineOutOfBounds(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buffer = TextBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len_chars(), 0);
        assert!(!buffer.can_undo());
    }

    #[test]
    fn test_buffer_from_string() {
        let buffer = TextBuffer::from("Hello, World!");
        assert_eq!(buffer.len_chars(), 13);
        assert_eq!(buffer.text(), "Hello, World!");
    }
}

//! # Carve Core
//!
//! Session state and orchestration for the carve editor.
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                     Session                      │
//! │  ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │
//! │  │ Document │ │ Settings │ │ Command Dispatch │  │
//! │  └────┬─────┘ └──────────┘ └──────────────────┘  │
//! │       │                                          │
//! │  ┌────┴───────┐   ┌─────────────┐ ┌───────────┐  │
//! │  │ TextBuffer │   │ Highlighter │ │ Event Log │  │
//! │  │ + History  │   │ + Find      │ │           │  │
//! │  └────────────┘   └─────────────┘ └───────────┘  │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Everything mutable lives in one owned `Session` passed explicitly to
//! operations; there are no process-wide singletons. All work is
//! synchronous on the calling thread.

pub mod command;
pub mod document;
pub mod event_log;
pub mod session;
pub mod settings;

pub use command::{dispatch, Command};
pub use document::Document;
pub use event_log::EventLog;
pub use session::Session;
pub use settings::{Settings, SettingsError};

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur in session operations.
///
/// No-op conditions (empty undo/redo stacks, empty find needle, zero
/// matches) are not errors; they complete silently.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Buffer error: {0}")]
    Buffer(#[from] carve_buffer::BufferError),

    #[error("No file path set; choose one and save as")]
    NoFilePath,
}
